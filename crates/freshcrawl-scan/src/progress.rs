//! Crawl progress reporting.

use std::time::{Duration, Instant};

use freshcrawl_core::{DiscoveredEntry, FolderListing};

/// Event emitted to a crawl observer, in traversal order.
#[derive(Debug, Clone, Copy)]
pub enum CrawlEvent<'a> {
    /// A folder was listed. `depth` is zero for the crawl root.
    FolderListed {
        path: &'a str,
        depth: u32,
        files: usize,
        folders: usize,
    },
    /// An entry matched the window.
    Discovered(&'a DiscoveredEntry),
}

/// Summary statistics for a finished crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Number of listing calls made.
    pub folders_listed: u64,
    /// Number of files seen across all listings.
    pub files_seen: u64,
    /// Total bytes of the files seen.
    pub bytes_seen: u64,
    /// Deepest folder level listed (root = 0).
    pub max_depth: u32,
    /// Wall time of the crawl.
    pub duration: Duration,
}

/// Entries and statistics from one crawl.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Folder the crawl started from.
    pub root: String,
    /// Matched entries in discovery order.
    pub entries: Vec<DiscoveredEntry>,
    /// Summary statistics.
    pub stats: CrawlStats,
}

impl CrawlReport {
    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the report, keeping only the entries.
    pub fn into_entries(self) -> Vec<DiscoveredEntry> {
        self.entries
    }
}

/// Internal stats tracker with timing.
#[derive(Debug)]
pub(crate) struct StatsTracker {
    start_time: Instant,
    stats: CrawlStats,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            stats: CrawlStats::default(),
        }
    }

    pub fn record_listing(&mut self, listing: &FolderListing, depth: u32) {
        self.stats.folders_listed += 1;
        self.stats.files_seen += listing.files.len() as u64;
        self.stats.bytes_seen += listing.file_bytes();
        self.stats.max_depth = self.stats.max_depth.max(depth);
    }

    pub fn finish(mut self) -> CrawlStats {
        self.stats.duration = self.start_time.elapsed();
        self.stats
    }
}
