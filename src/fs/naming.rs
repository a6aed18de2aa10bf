//! Filename generation for archive entries.

/// Content role of an archive entry, inferred from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRole {
    /// The main media file.
    Media,
    /// The overlay image drawn on top of the media.
    Overlay,
    /// Anything else, keeping the original entry name.
    Other(String),
}

impl EntryRole {
    /// Classify an archive entry by its name.
    pub fn classify(entry_name: &str) -> Self {
        if entry_name.starts_with("media") {
            EntryRole::Media
        } else if entry_name.starts_with("overlay") {
            EntryRole::Overlay
        } else {
            EntryRole::Other(entry_name.to_string())
        }
    }

    /// Final filename for an entry of this role.
    ///
    /// `Media` takes the item's own name, `Overlay` always lands as a png,
    /// and anything else keeps its original name as a suffix.
    pub fn file_name(&self, base: &str, extension: &str) -> String {
        match self {
            EntryRole::Media => format!("{}.{}", base, extension),
            EntryRole::Overlay => format!("{}_overlay.png", base),
            EntryRole::Other(name) => format!("{}_{}", base, name),
        }
    }
}
