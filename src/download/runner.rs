//! Run driver: preconditions, mode selection, item iteration.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::api::SnapchatClient;
use crate::download::item::process_item;
use crate::error::{Error, Result};
use crate::fs::require_dir;
use crate::media::Item;

/// Options for one download run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Destination directory. Must already exist.
    pub destination: PathBuf,
    pub username: String,
    pub password: String,
    /// Suppress per-item confirmation output.
    pub quiet: bool,
    /// Download friend stories instead of snaps.
    pub stories: bool,
    /// Only process stories posted by friends.
    pub friends_only: bool,
}

/// Authenticate and download every pending item, one at a time, in
/// enumeration order.
pub fn run<C: SnapchatClient>(client: &mut C, options: &RunOptions) -> Result<()> {
    // The destination is checked before any call to the service
    let destination = require_dir(&options.destination)?;

    let login = client.login(&options.username, &options.password)?;
    if !login.logged {
        return Err(Error::Authentication);
    }
    tracing::debug!("Logged in as {}", options.username);

    // Friends-only is meaningful only in story mode. The friend-name set is
    // materialized once, before iteration starts.
    let friends: Option<HashSet<String>> = if options.stories && options.friends_only {
        Some(
            client
                .get_friends()?
                .into_iter()
                .map(|friend| friend.name)
                .collect(),
        )
    } else {
        None
    };

    let items: Vec<Item> = if options.stories {
        client
            .get_friend_stories()?
            .into_iter()
            .map(Item::Story)
            .collect()
    } else {
        client.get_snaps()?.into_iter().map(Item::Snap).collect()
    };

    for item in &items {
        if let Some(friends) = &friends {
            if !friends.contains(item.sender()) {
                tracing::debug!("Skipping item {} from {}", item.id(), item.sender());
                continue;
            }
        }
        process_item(client, item, &destination, options.quiet)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::Path;

    use crate::api::fake::FakeClient;
    use crate::media::{MediaType, SnapItem, StoryItem};

    fn options(dir: &Path) -> RunOptions {
        RunOptions {
            destination: dir.to_path_buf(),
            username: "user".to_string(),
            password: "pass".to_string(),
            quiet: true,
            stories: false,
            friends_only: false,
        }
    }

    fn snap(id: &str, sender: &str) -> SnapItem {
        SnapItem {
            id: id.to_string(),
            sender: sender.to_string(),
            media_type: MediaType::Image,
        }
    }

    fn story(id: &str, sender: &str) -> StoryItem {
        StoryItem {
            id: id.to_string(),
            sender: sender.to_string(),
            media_id: format!("media-{}", id),
            media_key: "a2V5".to_string(),
            media_iv: "aXY=".to_string(),
            media_type: MediaType::Image,
        }
    }

    #[test]
    fn test_missing_destination_makes_no_service_calls() {
        let dir = tempfile::tempdir().unwrap();
        let mut client = FakeClient::logged_in();
        let opts = options(&dir.path().join("missing"));

        let result = run(&mut client, &opts);

        assert!(matches!(result, Err(Error::MissingDirectory(_))));
        assert_eq!(client.login_calls.get(), 0);
        assert_eq!(client.snap_list_calls.get(), 0);
    }

    #[test]
    fn test_failed_login_stops_before_enumeration() {
        let dir = tempfile::tempdir().unwrap();
        let mut client = FakeClient::default();
        client.snaps.push(snap("42", "alice"));

        let result = run(&mut client, &options(dir.path()));

        assert!(matches!(result, Err(Error::Authentication)));
        assert_eq!(client.login_calls.get(), 1);
        assert_eq!(client.snap_list_calls.get(), 0);
        assert_eq!(client.story_list_calls.get(), 0);
    }

    #[test]
    fn test_snap_mode_downloads_pending_snaps() {
        let dir = tempfile::tempdir().unwrap();
        let mut client = FakeClient::logged_in()
            .with_snap(snap("42", "alice"), Some(b"one".to_vec()))
            .with_snap(snap("43", "bob"), None)
            .with_snap(snap("44", "carol"), Some(b"three".to_vec()));

        run(&mut client, &options(dir.path())).unwrap();

        assert_eq!(fs::read(dir.path().join("alice_42.jpg")).unwrap(), b"one");
        assert!(!dir.path().join("bob_43.jpg").exists());
        assert_eq!(fs::read(dir.path().join("carol_44.jpg")).unwrap(), b"three");
    }

    #[test]
    fn test_existing_files_are_not_refetched() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("alice_42.jpg"), b"original").unwrap();
        let mut client = FakeClient::logged_in().with_snap(snap("42", "alice"), Some(b"new".to_vec()));

        run(&mut client, &options(dir.path())).unwrap();

        assert_eq!(client.blob_calls.get(), 0);
        assert_eq!(
            fs::read(dir.path().join("alice_42.jpg")).unwrap(),
            b"original"
        );
    }

    #[test]
    fn test_story_mode_enumerates_stories() {
        let dir = tempfile::tempdir().unwrap();
        let mut client = FakeClient::logged_in()
            .with_story(story("s1", "alice"), Some(b"story-one".to_vec()))
            .with_story(story("s2", "sponsor"), Some(b"story-two".to_vec()));

        let mut opts = options(dir.path());
        opts.stories = true;

        run(&mut client, &opts).unwrap();

        assert_eq!(client.snap_list_calls.get(), 0);
        assert_eq!(client.friend_list_calls.get(), 0);
        assert_eq!(fs::read(dir.path().join("s1.jpg")).unwrap(), b"story-one");
        assert_eq!(fs::read(dir.path().join("s2.jpg")).unwrap(), b"story-two");
    }

    #[test]
    fn test_friends_only_excludes_non_friends() {
        let dir = tempfile::tempdir().unwrap();
        let mut client = FakeClient::logged_in()
            .with_friend("alice")
            .with_story(story("s1", "alice"), Some(b"from-friend".to_vec()))
            .with_story(story("s2", "sponsor"), Some(b"sponsored".to_vec()));

        let mut opts = options(dir.path());
        opts.stories = true;
        opts.friends_only = true;

        run(&mut client, &opts).unwrap();

        assert_eq!(client.friend_list_calls.get(), 1);
        assert_eq!(
            fs::read(dir.path().join("s1.jpg")).unwrap(),
            b"from-friend"
        );
        // The non-friend story never reaches the processor
        assert!(!dir.path().join("s2.jpg").exists());
        assert_eq!(client.blob_calls.get(), 1);
    }

    #[test]
    fn test_friends_only_ignored_in_snap_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut client =
            FakeClient::logged_in().with_snap(snap("42", "stranger"), Some(b"data".to_vec()));

        let mut opts = options(dir.path());
        opts.friends_only = true;

        run(&mut client, &opts).unwrap();

        assert_eq!(client.friend_list_calls.get(), 0);
        assert!(dir.path().join("stranger_42.jpg").exists());
    }
}
