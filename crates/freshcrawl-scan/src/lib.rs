//! Remote tree crawling engine for freshcrawl.
//!
//! This crate walks a remote folder hierarchy through a
//! [`RemoteTreeClient`] and collects the entries a classifier reports.
//!
//! # Overview
//!
//! - **Depth-first, pre-order** traversal: a folder's own targets are
//!   classified before any of its subfolders is entered
//! - **One listing per folder**, no caching and no retries
//! - **Explicit accumulator**: entries come back in a [`CrawlReport`]
//! - **Interactive folder selection** via [`FolderSelector`]
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use freshcrawl_analyze::RecencyClassifier;
//! use freshcrawl_core::{MemoryTree, RecencyWindow, SearchMode, Timestamps};
//! use freshcrawl_scan::TreeCrawler;
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
//! let mut tree = MemoryTree::new("/sites/a/Shared Documents");
//! tree.add_file("/sites/a/Shared Documents", "plan.docx", 10, Timestamps::created_at(now));
//!
//! let classifier = RecencyClassifier::new(RecencyWindow::new(now, 7), SearchMode::Both);
//! let report = TreeCrawler::new(&tree)
//!     .crawl("/sites/a/Shared Documents", &classifier)
//!     .unwrap();
//!
//! assert_eq!(report.entries.len(), 1);
//! ```

mod crawler;
mod progress;
pub mod select;

pub use crawler::TreeCrawler;
pub use progress::{CrawlEvent, CrawlReport, CrawlStats};
pub use select::{FolderSelector, Transition};

// Re-export core types for convenience
pub use freshcrawl_core::{
    CrawlError, DiscoveredEntry, EntryType, FolderListing, RemoteNode, RemoteTreeClient,
    SearchMode,
};
