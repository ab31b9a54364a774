//! Input classification for bulk lookups.
//!
//! Free-form operator input (one entry per line) is split into trimmed
//! entries and classified as a whole into identifier-lookup or
//! link-lookup mode. The mode is decided once per batch from the first
//! entry's shape; entries are never re-classified individually, so a
//! batch that mixes PRB IDs and URLs is submitted under the mode of
//! its first line.

use anyhow::{Result, bail};

/// Prefix that marks an entry as a generated PRB identifier.
pub const ID_PREFIX: &str = "PRB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Resolve short identifiers to their backing URLs.
    Id,
    /// Resolve long URLs to their associated identifiers.
    Link,
}

/// An ordered batch of entries with a single lookup mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBatch {
    pub mode: LookupMode,
    pub entries: Vec<String>,
}

/// Split raw multi-line input into trimmed, non-empty entries.
pub fn split_entries(input: &str) -> Vec<String> {
    input
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Classify a batch of entries from the shape of its first entry.
///
/// Never runs on an empty sequence; callers validate emptiness first
/// so they can surface their own message.
pub fn classify(entries: Vec<String>) -> Result<ClassifiedBatch> {
    let Some(first) = entries.first() else {
        bail!("Nothing to classify");
    };

    let mode = if first.starts_with(ID_PREFIX) {
        LookupMode::Id
    } else {
        LookupMode::Link
    };

    Ok(ClassifiedBatch { mode, entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_drops_blank_lines() {
        let entries = split_entries("  PRB001 \n\n   \nPRB002\n");
        assert_eq!(entries, vec!["PRB001".to_string(), "PRB002".to_string()]);
    }

    #[test]
    fn test_prefix_yields_id_mode() {
        let batch = classify(vec!["PRB100".to_string(), "PRB101".to_string()]).unwrap();
        assert_eq!(batch.mode, LookupMode::Id);
        assert_eq!(batch.entries.len(), 2);
    }

    #[test]
    fn test_non_prefix_yields_link_mode() {
        let batch = classify(vec!["https://example.com/a".to_string()]).unwrap();
        assert_eq!(batch.mode, LookupMode::Link);
    }

    #[test]
    fn test_first_entry_decides_mixed_batch() {
        // Trailing PRB-shaped lines do not flip a link batch.
        let batch = classify(vec![
            "https://example.com/a".to_string(),
            "PRB200".to_string(),
            "PRB201".to_string(),
        ])
        .unwrap();
        assert_eq!(batch.mode, LookupMode::Link);
        assert_eq!(batch.entries.len(), 3);
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        assert!(classify(Vec::new()).is_err());
    }

    #[test]
    fn test_entry_order_preserved() {
        let entries = vec![
            "PRB3".to_string(),
            "PRB1".to_string(),
            "PRB2".to_string(),
        ];
        let batch = classify(entries.clone()).unwrap();
        assert_eq!(batch.entries, entries);
    }
}
