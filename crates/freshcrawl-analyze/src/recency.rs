//! Recency-based classification.
//!
//! A node is reported when its creation or modification time (depending on
//! the search mode) is strictly less than the window length before `now`:
//! - `Both` reports creation first and falls back to modification
//! - `New` and `NewFolder` look only at creation
//! - `Modified` looks only at modification

use chrono::TimeDelta;
use tracing::trace;

use freshcrawl_core::{DiscoveredEntry, EntryType, RecencyWindow, RemoteNode, SearchMode};

/// Classifier with a window and mode fixed for one crawl.
#[derive(Debug, Clone, Copy)]
pub struct RecencyClassifier {
    window: RecencyWindow,
    mode: SearchMode,
}

impl RecencyClassifier {
    /// Create a classifier for one crawl.
    pub fn new(window: RecencyWindow, mode: SearchMode) -> Self {
        Self { window, mode }
    }

    /// The window every comparison uses.
    pub fn window(&self) -> &RecencyWindow {
        &self.window
    }

    /// The search mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Classify a node, returning an entry when it falls inside the window.
    pub fn classify(&self, node: &RemoteNode) -> Option<DiscoveredEntry> {
        classify(node, &self.window, self.mode)
    }
}

/// Classify a node against a window and mode.
///
/// Folders are only classified in `NewFolder` mode and files only in the
/// other modes; any other combination yields `None`.
pub fn classify(
    node: &RemoteNode,
    window: &RecencyWindow,
    mode: SearchMode,
) -> Option<DiscoveredEntry> {
    if node.is_folder() != mode.targets_folders() {
        return None;
    }

    let created = node.timestamps.created;
    let modified = node.timestamps.modified;

    let (entry_type, timestamp) = match mode {
        SearchMode::Both if window.contains(created) => (EntryType::New, created),
        SearchMode::Both if window.contains(modified) => (EntryType::Modified, modified),
        SearchMode::New if window.contains(created) => (EntryType::New, created),
        SearchMode::NewFolder if window.contains(created) => (EntryType::NewFolder, created),
        SearchMode::Modified if window.contains(modified) => (EntryType::Modified, modified),
        SearchMode::Both | SearchMode::New | SearchMode::NewFolder | SearchMode::Modified => {
            trace!(path = %node.path, %mode, "outside window");
            return None;
        }
    };

    Some(DiscoveredEntry::new(node.path.clone(), entry_type, timestamp))
}

/// Format an age as a human-readable string. Negative ages read as "just now".
pub fn format_age(age: TimeDelta) -> String {
    let secs = age.num_seconds();
    if secs < 1 {
        "just now".to_string()
    } else if secs < 60 {
        format!("{secs} seconds")
    } else if secs < 3600 {
        format!("{} minutes", secs / 60)
    } else if secs < 86400 {
        format!("{} hours", secs / 3600)
    } else {
        format!("{} days", secs / 86400)
    }
}
