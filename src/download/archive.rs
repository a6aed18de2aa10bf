//! Composite archive splitting.

use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::Path;

use zip::ZipArchive;

use crate::error::Result;
use crate::fs::EntryRole;

/// Unpack a composite archive into `destination`.
///
/// Every entry is extracted under its original name, then renamed to the
/// role-derived filename. Members are not re-checked against existing
/// files; the caller's top-level existence guard is the only dedup step.
pub fn split_archive(data: &[u8], destination: &Path, base: &str, extension: &str) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let entry_name = entry.name().to_string();
        let role = EntryRole::classify(&entry_name);

        let extracted = destination.join(&entry_name);
        let target = destination.join(role.file_name(base, extension));

        {
            let mut output = File::create(&extracted)?;
            io::copy(&mut entry, &mut output)?;
        }
        fs::rename(&extracted, &target)?;
    }

    Ok(())
}
