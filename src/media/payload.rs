//! Payload classification.

/// Local file header magic of a zip archive.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// A downloaded payload, classified exactly once.
#[derive(Debug)]
pub enum Payload {
    /// A single media blob, written as-is.
    SingleBlob(Vec<u8>),
    /// A composite archive holding a media entry and optional overlay.
    Archive(Vec<u8>),
}

/// Check whether the payload bytes look like a zip archive.
pub fn is_zip(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Classify payload bytes so downstream code branches on a closed set.
pub fn classify(data: Vec<u8>) -> Payload {
    if is_zip(&data) {
        Payload::Archive(data)
    } else {
        Payload::SingleBlob(data)
    }
}
