//! Snapchat Downloader - download pending snaps and friend stories.
//!
//! The heavy lifting of the service protocol (session authentication,
//! request signing, payload decryption) sits behind the
//! [`api::SnapchatClient`] trait; this crate's own surface is the
//! selection, naming, and archive-splitting logic around it.
//!
//! # Features
//!
//! - Download pending snaps or friend stories
//! - Optional friends-only filtering for stories
//! - Composite archives split into media and overlay files
//! - Existing files are never overwritten; re-runs resume where they left off
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use snapchat_downloader::{run, RunOptions, Snapchat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = Snapchat::new()?;
//!     let options = RunOptions {
//!         destination: PathBuf::from("snaps"),
//!         username: "user".to_string(),
//!         password: "secret".to_string(),
//!         quiet: false,
//!         stories: false,
//!         friends_only: false,
//!     };
//!     run(&mut client, &options)?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{Snapchat, SnapchatClient};
pub use download::{process_item, run, split_archive, RunOptions};
pub use error::{Error, Result};
pub use media::{Item, MediaType, SnapItem, StoryItem};
