//! Core types and traits for freshcrawl.
//!
//! This crate provides the data model shared by the crawler, classifier and
//! exporter: remote nodes, search modes, recency windows and discovered
//! entries. It also defines the collaborator seams (`RemoteStore`,
//! `RemoteTreeClient`, `Prompt`) that keep the crawl logic independent of
//! SharePoint and of the terminal.

mod client;
mod config;
mod entry;
mod error;
pub mod memory;
mod mode;
mod node;
pub mod path;
mod prompt;
mod settings;
mod window;

pub use client::{Credentials, RemoteStore, RemoteTreeClient};
pub use config::{CrawlConfig, CrawlConfigBuilder};
pub use entry::{DiscoveredEntry, EntryType};
pub use error::CrawlError;
pub use memory::MemoryTree;
pub use mode::SearchMode;
pub use node::{FolderListing, NodeKind, RemoteNode, Timestamps};
pub use prompt::{Prompt, ScriptedPrompt};
pub use settings::Settings;
pub use window::{MAX_DAYS, RecencyWindow};
