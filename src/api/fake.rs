//! Canned collaborator for driver and processor tests.

use std::cell::Cell;
use std::collections::HashMap;

use crate::api::{Friend, LoginResponse, SnapchatClient};
use crate::error::Result;
use crate::media::{SnapItem, StoryItem};

/// In-memory `SnapchatClient` with canned responses and call counters.
#[derive(Default)]
pub struct FakeClient {
    pub logged: bool,
    pub snaps: Vec<SnapItem>,
    pub stories: Vec<StoryItem>,
    pub friends: Vec<Friend>,
    pub blobs: HashMap<String, Vec<u8>>,
    pub story_blobs: HashMap<String, Vec<u8>>,
    pub login_calls: Cell<u32>,
    pub snap_list_calls: Cell<u32>,
    pub story_list_calls: Cell<u32>,
    pub friend_list_calls: Cell<u32>,
    pub blob_calls: Cell<u32>,
}

impl FakeClient {
    pub fn logged_in() -> Self {
        Self {
            logged: true,
            ..Self::default()
        }
    }

    /// Add a snap; `blob` is what `get_blob` will hand back for its id.
    pub fn with_snap(mut self, snap: SnapItem, blob: Option<Vec<u8>>) -> Self {
        if let Some(blob) = blob {
            self.blobs.insert(snap.id.clone(), blob);
        }
        self.snaps.push(snap);
        self
    }

    /// Add a story; `blob` is keyed by the story's media id.
    pub fn with_story(mut self, story: StoryItem, blob: Option<Vec<u8>>) -> Self {
        if let Some(blob) = blob {
            self.story_blobs.insert(story.media_id.clone(), blob);
        }
        self.stories.push(story);
        self
    }

    pub fn with_friend(mut self, name: &str) -> Self {
        self.friends.push(Friend {
            name: name.to_string(),
        });
        self
    }
}

impl SnapchatClient for FakeClient {
    fn login(&mut self, _username: &str, _password: &str) -> Result<LoginResponse> {
        self.login_calls.set(self.login_calls.get() + 1);
        Ok(LoginResponse {
            logged: self.logged,
            auth_token: self.logged.then(|| "token".to_string()),
        })
    }

    fn get_snaps(&self) -> Result<Vec<SnapItem>> {
        self.snap_list_calls.set(self.snap_list_calls.get() + 1);
        Ok(self.snaps.clone())
    }

    fn get_friend_stories(&self) -> Result<Vec<StoryItem>> {
        self.story_list_calls.set(self.story_list_calls.get() + 1);
        Ok(self.stories.clone())
    }

    fn get_friends(&self) -> Result<Vec<Friend>> {
        self.friend_list_calls.set(self.friend_list_calls.get() + 1);
        Ok(self.friends.clone())
    }

    fn get_blob(&self, id: &str) -> Result<Option<Vec<u8>>> {
        self.blob_calls.set(self.blob_calls.get() + 1);
        Ok(self.blobs.get(id).cloned())
    }

    fn get_story_blob(&self, media_id: &str, _key: &str, _iv: &str) -> Result<Option<Vec<u8>>> {
        self.blob_calls.set(self.blob_calls.get() + 1);
        Ok(self.story_blobs.get(media_id).cloned())
    }
}
