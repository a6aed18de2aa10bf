//! Per-item processing.

use std::fs;
use std::path::Path;

use crate::api::SnapchatClient;
use crate::download::archive::split_archive;
use crate::error::Result;
use crate::fs::item_path;
use crate::media::{classify, Item, Payload};
use crate::output::print_saved;

/// Download one item into `destination`.
///
/// Skips silently when the expected output file already exists or when the
/// service no longer has the content. Prints one confirmation line per
/// item, never per archive member.
pub fn process_item<C: SnapchatClient>(
    client: &C,
    item: &Item,
    destination: &Path,
    quiet: bool,
) -> Result<()> {
    let extension = item.media_type().extension();
    let base = item.base_name();
    let target = item_path(destination, &base, extension);

    if target.is_file() {
        tracing::debug!("Skipping existing file: {}", target.display());
        return Ok(());
    }

    let data = match item {
        Item::Snap(snap) => client.get_blob(&snap.id)?,
        Item::Story(story) => {
            client.get_story_blob(&story.media_id, &story.media_key, &story.media_iv)?
        }
    };

    // Expired or already-viewed content comes back empty
    let Some(data) = data else {
        tracing::debug!("No content for item {}", item.id());
        return Ok(());
    };

    match classify(data) {
        Payload::Archive(bytes) => split_archive(&bytes, destination, &base, extension)?,
        Payload::SingleBlob(bytes) => fs::write(&target, &bytes)?,
    }

    if !quiet {
        print_saved(&target);
    }

    Ok(())
}
