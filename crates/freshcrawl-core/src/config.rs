//! Crawl configuration types.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::mode::SearchMode;
use crate::path;
use crate::window::{MAX_DAYS, RecencyWindow};

/// Configuration for one crawl invocation.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CrawlConfig {
    /// Server-relative folder to start from.
    pub root: String,

    /// Size of the recency window in days.
    #[builder(default = "14")]
    #[serde(default = "default_days")]
    pub days: u32,

    /// What to look for.
    #[builder(default)]
    #[serde(default)]
    pub mode: SearchMode,

    /// Fixed reference instant (None = UTC midnight today).
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

fn default_days() -> u32 {
    14
}

impl CrawlConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if path::normalize(root).is_empty() => {
                return Err("Root folder cannot be empty".to_string());
            }
            None => return Err("Root folder is required".to_string()),
            _ => {}
        }
        match self.days {
            Some(0) => return Err("Window must cover at least one day".to_string()),
            Some(days) if days > MAX_DAYS => {
                return Err(format!("Window cannot exceed {MAX_DAYS} days"));
            }
            _ => {}
        }
        Ok(())
    }
}

impl CrawlConfig {
    /// Create a new crawl config builder.
    pub fn builder() -> CrawlConfigBuilder {
        CrawlConfigBuilder::default()
    }

    /// Create a simple config for a root folder with default window and mode.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            days: default_days(),
            mode: SearchMode::default(),
            now: None,
        }
    }

    /// Root folder without trailing separators.
    pub fn root(&self) -> &str {
        path::normalize(&self.root)
    }

    /// Build the recency window. Call once per crawl and reuse the result.
    pub fn window(&self) -> RecencyWindow {
        match self.now {
            Some(now) => RecencyWindow::new(now, self.days),
            None => RecencyWindow::ending_today(self.days),
        }
    }
}
