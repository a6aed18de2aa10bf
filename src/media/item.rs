//! Item representation for snaps and stories.

use serde::Deserialize;

/// Type of media content, decoded from the service's numeric type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum MediaType {
    Image,
    Video,
    VideoNoAudio,
    Unknown,
}

impl From<i64> for MediaType {
    fn from(code: i64) -> Self {
        match code {
            0 => MediaType::Image,
            1 => MediaType::Video,
            2 => MediaType::VideoNoAudio,
            _ => MediaType::Unknown,
        }
    }
}

impl MediaType {
    /// File extension (without dot) for this media type.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaType::Image => "jpg",
            MediaType::Video | MediaType::VideoNoAudio => "mp4",
            MediaType::Unknown => "bin",
        }
    }
}

/// A pending direct-message media item.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapItem {
    pub id: String,
    pub sender: String,
    pub media_type: MediaType,
}

/// A story entry posted by a friend.
///
/// `media_key` and `media_iv` are the base64 key material the service needs
/// to hand back a usable payload; `sender` is consulted by the friends-only
/// filter and never participates in the filename.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryItem {
    pub id: String,
    pub sender: String,
    pub media_id: String,
    pub media_key: String,
    pub media_iv: String,
    pub media_type: MediaType,
}

/// A downloadable item, either a snap or a story.
#[derive(Debug, Clone)]
pub enum Item {
    Snap(SnapItem),
    Story(StoryItem),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Snap(snap) => &snap.id,
            Item::Story(story) => &story.id,
        }
    }

    pub fn sender(&self) -> &str {
        match self {
            Item::Snap(snap) => &snap.sender,
            Item::Story(story) => &story.sender,
        }
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            Item::Snap(snap) => snap.media_type,
            Item::Story(story) => story.media_type,
        }
    }

    /// Base output name: `{sender}_{id}` for snaps, `{id}` for stories.
    pub fn base_name(&self) -> String {
        match self {
            Item::Snap(snap) => format!("{}_{}", snap.sender, snap.id),
            Item::Story(story) => story.id.clone(),
        }
    }
}
