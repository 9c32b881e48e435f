//! Search modes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// What a crawl looks for. Fixed for the duration of one crawl.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Files created inside the window.
    New,
    /// Folders created inside the window.
    NewFolder,
    /// Files modified inside the window.
    Modified,
    /// Files created inside the window, otherwise files modified inside it.
    #[default]
    Both,
}

impl SearchMode {
    /// Menu label for interactive selection.
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::New => "New files only",
            SearchMode::NewFolder => "New folders only",
            SearchMode::Modified => "Modified files only",
            SearchMode::Both => "Both new and modified files",
        }
    }

    /// Folders are the classified targets; files are skipped.
    pub fn targets_folders(&self) -> bool {
        matches!(self, SearchMode::NewFolder)
    }

    /// Mode at a zero-based menu position, in declaration order.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}
