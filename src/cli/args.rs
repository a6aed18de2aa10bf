//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::download::RunOptions;

/// Snapchat snap and story downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "snapchat-downloader",
    version,
    about = "Download snaps and stories from Snapchat",
    long_about = "A CLI tool to download pending snaps or friend stories into a directory.\n\n\
                  Files are written under deterministic names; existing files are never overwritten."
)]
pub struct Args {
    /// Account username.
    #[arg(short, long, env = "SNAPCHAT_USERNAME")]
    pub username: String,

    /// Account password. Prompted interactively when omitted.
    #[arg(short, long, env = "SNAPCHAT_PASSWORD")]
    pub password: Option<String>,

    /// Suppress per-item confirmation output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Download friend stories instead of snaps.
    #[arg(short, long)]
    pub stories: bool,

    /// Only download stories posted by friends. No sponsored content.
    #[arg(short, long)]
    pub friends_only: bool,

    /// Directory to save downloads into. Must already exist.
    pub path: PathBuf,
}

impl Args {
    /// Build run options, with the password resolved by the caller.
    pub fn into_options(self, password: String) -> RunOptions {
        RunOptions {
            destination: self.path,
            username: self.username,
            password,
            quiet: self.quiet,
            stories: self.stories,
            friends_only: self.friends_only,
        }
    }
}
