//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Validate that the destination directory exists and resolve it to an
/// absolute path. The directory is never created by this tool.
pub fn require_dir(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(Error::MissingDirectory(path.to_path_buf()));
    }
    Ok(path.canonicalize()?)
}

/// Candidate single-file output path for an item.
pub fn item_path(dir: &Path, base: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", base, extension))
}
