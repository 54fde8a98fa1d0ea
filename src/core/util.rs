//! Common utilities

use xxhash_rust::xxh3::xxh3_64;

/// Compute the XXH3 hash of bytes as 16 hex digits
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Split text at the first occurrence of `marker`.
///
/// Returns the prefix before the marker and the marker's byte offset,
/// or the whole text and `None` when the marker does not occur.
pub fn split_at_marker<'a>(text: &'a str, marker: &str) -> (&'a str, Option<usize>) {
    match text.find(marker) {
        Some(offset) => (&text[..offset], Some(offset)),
        None => (text, None),
    }
}
