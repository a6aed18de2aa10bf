//! API response type definitions.

use serde::Deserialize;

use crate::media::{SnapItem, StoryItem};

/// Login outcome. Only a truthy `logged` permits enumeration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub logged: bool,
    #[serde(default)]
    pub auth_token: Option<String>,
}

/// A friend record from the user's friend list.
#[derive(Debug, Clone, Deserialize)]
pub struct Friend {
    pub name: String,
}

/// Envelope returned by the updates endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatesResponse {
    #[serde(default)]
    pub snaps: Vec<SnapItem>,
    #[serde(default)]
    pub friends: Vec<Friend>,
}

/// Envelope returned by the stories endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct StoriesResponse {
    #[serde(default)]
    pub stories: Vec<StoryItem>,
}
