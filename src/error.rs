//! Error types for the snapchat-downloader application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Precondition errors
    #[error("No such directory: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Invalid username or password")]
    Authentication,

    // API errors
    #[error("API error: {0}")]
    Api(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Archive errors
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes reported by the binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const PRECONDITION_ERROR: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const DOWNLOAD_ERROR: i32 = 3;
}
