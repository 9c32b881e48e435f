//! Recency classification for freshcrawl.
//!
//! Decides whether a remote node belongs in the result set for a given
//! [`SearchMode`] and [`RecencyWindow`]:
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use freshcrawl_analyze::{EntryType, RecencyClassifier, RecencyWindow, SearchMode};
//! use freshcrawl_core::{RemoteNode, Timestamps};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
//! let classifier = RecencyClassifier::new(RecencyWindow::new(now, 5), SearchMode::Both);
//!
//! let node = RemoteNode::new_file(
//!     "/sites/axion/Shared Documents/fileA.docx",
//!     1024,
//!     Timestamps::new(now - TimeDelta::days(3), now - TimeDelta::days(1)),
//! );
//!
//! let entry = classifier.classify(&node).unwrap();
//! assert_eq!(entry.entry_type, EntryType::New);
//! ```

pub mod recency;

pub use recency::{RecencyClassifier, classify, format_age};

// Re-export core types
pub use freshcrawl_core::{DiscoveredEntry, EntryType, RecencyWindow, RemoteNode, SearchMode};
