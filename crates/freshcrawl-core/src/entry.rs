//! Discovered entries produced by classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::path;

/// Why an entry was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// File created inside the window.
    New,
    /// File modified inside the window.
    Modified,
    /// Folder created inside the window.
    NewFolder,
}

/// A file or folder that matched the recency window.
///
/// Entries are immutable once created and are kept in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredEntry {
    /// Server-relative path of the item.
    pub path: String,
    /// Classification outcome.
    pub entry_type: EntryType,
    /// The timestamp that satisfied the window (creation or modification).
    pub timestamp: DateTime<Utc>,
}

impl DiscoveredEntry {
    /// Create a new entry.
    pub fn new(path: impl Into<String>, entry_type: EntryType, timestamp: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            entry_type,
            timestamp,
        }
    }

    /// Display name of the item.
    pub fn name(&self) -> &str {
        path::last_segment(&self.path)
    }

    /// Human-readable description, e.g. `new file` or `new folder`.
    pub fn describe(&self) -> &'static str {
        match self.entry_type {
            EntryType::New => "new file",
            EntryType::Modified => "modified file",
            EntryType::NewFolder => "new folder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entry_name_and_type() {
        let entry = DiscoveredEntry::new(
            "/sites/a/Shared Documents/plan.xlsx",
            EntryType::Modified,
            Utc.with_ymd_and_hms(2024, 3, 8, 9, 30, 0).unwrap(),
        );
        assert_eq!(entry.name(), "plan.xlsx");
        assert_eq!(entry.entry_type.to_string(), "modified");
        assert_eq!(entry.describe(), "modified file");
        assert_eq!(EntryType::NewFolder.to_string(), "new_folder");
    }
}
