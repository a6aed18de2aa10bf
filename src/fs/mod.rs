//! Filesystem module.
//!
//! Provides:
//! - Destination directory validation
//! - Output filename generation

pub mod naming;
pub mod paths;

pub use naming::EntryRole;
pub use paths::{item_path, require_dir};
