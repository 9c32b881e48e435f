//! Export rows derived from discovered entries.

use chrono::SecondsFormat;
use serde::Serialize;

use freshcrawl_core::{DiscoveredEntry, EntryType};

/// One CSV row. Field order is column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    /// Browsable URL of the folder containing the item.
    pub url: String,
    /// Display name of the item.
    pub name: String,
    /// Classification outcome.
    pub entry_type: EntryType,
    /// RFC 3339 timestamp in UTC.
    pub timestamp: String,
}

impl ExportRecord {
    /// Build a row for `entry` against the store's web origin.
    pub fn from_entry(entry: &DiscoveredEntry, web_origin: &str) -> Self {
        let (parent, name) = split_path(&entry.path);
        Self {
            url: folder_url(web_origin, parent),
            name: name.to_string(),
            entry_type: entry.entry_type,
            timestamp: entry.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Split a path at its last `/` into the remainder and the last segment.
pub fn split_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((parent, name)) => (parent, name),
        None => ("", path),
    }
}

/// Absolute URL for a server-relative folder path, with spaces encoded.
pub fn folder_url(web_origin: &str, folder: &str) -> String {
    format!(
        "{}{}",
        web_origin.trim_end_matches('/'),
        folder.replace(' ', "%20")
    )
}
