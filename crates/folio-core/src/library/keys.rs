//! Storage-key and local-id derivation.
//!
//! Both storage keys and session-local item ids are derived from the current
//! epoch-millisecond timestamp. Raw timestamps can collide when two adds land
//! in the same millisecond, so every value passes through one atomic
//! high-water mark that bumps equal values; issued values are strictly
//! increasing within a process.

use crate::config::StorageConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Highest id issued so far.
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Issue a new timestamp-derived identifier.
///
/// Returns the current epoch-millisecond value, bumped past the previously
/// issued one when they collide.
pub fn next_timestamp_id() -> u64 {
    let now = epoch_millis();
    let prev = LAST_ISSUED
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(0);
    now.max(prev + 1)
}

/// Derive a collision-resistant storage key for an uploaded file:
/// `{epochMillis}.{extension}`.
pub fn storage_key(file_name: &str) -> String {
    format!("{}.{}", next_timestamp_id(), file_extension(file_name))
}

/// Extension segment after the final `.` of a file name, lowercased.
/// Names without an extension fall back to [`StorageConfig::FALLBACK_EXTENSION`].
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| StorageConfig::FALLBACK_EXTENSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("notes.pdf"), "pdf");
        assert_eq!(file_extension("Report.PDF"), "pdf");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("no-extension"), "bin");
        assert_eq!(file_extension("trailing-dot."), "bin");
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut last = 0;
        for _ in 0..1000 {
            let id = next_timestamp_id();
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn test_storage_key_shape() {
        let key = storage_key("notes.pdf");
        let (stem, ext) = key.rsplit_once('.').unwrap();
        assert_eq!(ext, "pdf");
        assert!(stem.parse::<u64>().is_ok());
    }
}
