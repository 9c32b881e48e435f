//! Depth-first remote tree crawler.

use tracing::{debug, info, warn};

use freshcrawl_analyze::RecencyClassifier;
use freshcrawl_core::{CrawlError, DiscoveredEntry, RemoteNode, RemoteTreeClient, SearchMode, path};

use crate::progress::{CrawlEvent, CrawlReport, StatsTracker};

/// Crawler that walks a remote tree one listing call per folder.
pub struct TreeCrawler<C> {
    client: C,
}

impl<C: RemoteTreeClient> TreeCrawler<C> {
    /// Create a crawler over a client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Crawl `root` and collect every node the classifier reports.
    pub fn crawl(
        &self,
        root: &str,
        classifier: &RecencyClassifier,
    ) -> Result<CrawlReport, CrawlError> {
        self.crawl_with_observer(root, classifier, |_| {})
    }

    /// Crawl `root`, reporting progress events to `observer`.
    pub fn crawl_with_observer<F>(
        &self,
        root: &str,
        classifier: &RecencyClassifier,
        mut observer: F,
    ) -> Result<CrawlReport, CrawlError>
    where
        F: FnMut(CrawlEvent<'_>),
    {
        self.walk(
            root,
            classifier.mode(),
            &mut |node| classifier.classify(node),
            &mut observer,
        )
    }

    /// Crawl `root` with an arbitrary classification callback.
    ///
    /// In `NewFolder` mode the callback sees every subfolder of a level
    /// before any of them is entered. In the other modes it sees every file
    /// of a level, then the walk descends into subfolders left to right.
    /// A listing failure aborts the walk and discards the entries found so
    /// far.
    pub fn walk(
        &self,
        root: &str,
        mode: SearchMode,
        classify: &mut dyn FnMut(&RemoteNode) -> Option<DiscoveredEntry>,
        observer: &mut dyn FnMut(CrawlEvent<'_>),
    ) -> Result<CrawlReport, CrawlError> {
        let root = path::normalize(root);
        if root.is_empty() {
            return Err(CrawlError::NotFound {
                path: "/".to_string(),
            });
        }

        debug!(root, %mode, "starting crawl");

        let mut walk = Walk {
            client: &self.client,
            root,
            mode,
            classify,
            observer,
            entries: Vec::new(),
            tracker: StatsTracker::new(),
        };

        if let Err(err) = walk.visit(root, 0) {
            warn!(
                found = walk.entries.len(),
                error = %err,
                "crawl aborted, discarding partial results"
            );
            return Err(err);
        }

        let stats = walk.tracker.finish();
        debug!(
            folders = stats.folders_listed,
            files = stats.files_seen,
            found = walk.entries.len(),
            "crawl complete"
        );

        Ok(CrawlReport {
            root: root.to_string(),
            entries: walk.entries,
            stats,
        })
    }
}

/// State for one crawl invocation.
struct Walk<'a, C> {
    client: &'a C,
    root: &'a str,
    mode: SearchMode,
    classify: &'a mut dyn FnMut(&RemoteNode) -> Option<DiscoveredEntry>,
    observer: &'a mut dyn FnMut(CrawlEvent<'_>),
    entries: Vec<DiscoveredEntry>,
    tracker: StatsTracker,
}

impl<C: RemoteTreeClient> Walk<'_, C> {
    /// List one folder, classify its targets, then recurse.
    fn visit(&mut self, folder: &str, depth: u32) -> Result<(), CrawlError> {
        let listing = self.client.list_children(folder)?;
        debug!(
            folder,
            files = listing.files.len(),
            folders = listing.folders.len(),
            "listed folder"
        );

        self.tracker.record_listing(&listing, depth);
        (self.observer)(CrawlEvent::FolderListed {
            path: folder,
            depth,
            files: listing.files.len(),
            folders: listing.folders.len(),
        });

        let targets = if self.mode.targets_folders() {
            &listing.folders
        } else {
            &listing.files
        };
        for node in targets {
            self.consider(node);
        }

        for subfolder in &listing.folders {
            if !path::is_within(&subfolder.path, self.root) {
                warn!(path = %subfolder.path, root = self.root, "skipping folder outside crawl root");
                continue;
            }
            self.visit(&subfolder.path, depth + 1)?;
        }

        Ok(())
    }

    fn consider(&mut self, node: &RemoteNode) {
        if !path::is_within(&node.path, self.root) {
            warn!(path = %node.path, root = self.root, "skipping node outside crawl root");
            return;
        }

        if let Some(entry) = (self.classify)(node) {
            info!(path = %entry.path, kind = %entry.entry_type, "found entry");
            (self.observer)(CrawlEvent::Discovered(&entry));
            self.entries.push(entry);
        }
    }
}
