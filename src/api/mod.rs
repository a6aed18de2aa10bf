//! Snapchat API module.
//!
//! This module provides:
//! - The [`SnapchatClient`] collaborator interface
//! - A thin blocking HTTP client implementing it
//! - API response types

pub mod client;
pub mod types;

#[cfg(test)]
pub mod fake;

pub use client::Snapchat;
pub use types::{Friend, LoginResponse, StoriesResponse, UpdatesResponse};

use crate::error::Result;
use crate::media::{SnapItem, StoryItem};

/// Authenticated session with the messaging service.
///
/// The driver receives an implementation as an injected handle and never
/// reaches for ambient session state; tests substitute a fake. All calls
/// are synchronous and blocking.
pub trait SnapchatClient {
    /// Authenticate and establish a session.
    fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse>;

    /// Pending media messages for the logged-in user.
    fn get_snaps(&self) -> Result<Vec<SnapItem>>;

    /// Story entries posted by friends.
    fn get_friend_stories(&self) -> Result<Vec<StoryItem>>;

    /// The logged-in user's friend list.
    fn get_friends(&self) -> Result<Vec<Friend>>;

    /// Payload bytes for a snap, or `None` when the content is gone.
    fn get_blob(&self, id: &str) -> Result<Option<Vec<u8>>>;

    /// Payload bytes for a story, or `None` when the content is gone.
    fn get_story_blob(&self, media_id: &str, key: &str, iv: &str) -> Result<Option<Vec<u8>>>;
}
