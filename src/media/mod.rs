//! Media module for item representation and payload classification.

pub mod item;
pub mod payload;

pub use item::{Item, MediaType, SnapItem, StoryItem};
pub use payload::{classify, is_zip, Payload};
