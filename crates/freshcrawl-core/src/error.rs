//! Error types for crawl operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while authenticating, crawling or exporting.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Bad credentials or unreachable site.
    #[error("Authentication failed for {site}: {message}")]
    Authentication { site: String, message: String },

    /// Remote folder does not exist.
    #[error("Folder not found: {path}")]
    NotFound { path: String },

    /// Input could not be parsed as the expected value.
    #[error("Expected {expected}, got {input:?}")]
    InputFormat { input: String, expected: String },

    /// Transport or protocol failure talking to the remote store.
    #[error("Request for {target} failed: {message}")]
    Request { target: String, message: String },

    /// A copied browser link that does not point at a site folder.
    #[error("Not a SharePoint folder link ({reason}): {link}")]
    InvalidLink { link: String, reason: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Interactive input ended before a choice was made.
    #[error("Input closed before a choice was made")]
    InputClosed,

    /// Local I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result file could not be written.
    #[error("Export to {path} failed: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CrawlError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an export error keeping the writer's error as the source.
    pub fn export(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Export {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create an input format error.
    pub fn input_format(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InputFormat {
            input: input.into(),
            expected: expected.into(),
        }
    }

    /// Create a request error.
    pub fn request(target: impl Into<String>, message: impl ToString) -> Self {
        Self::Request {
            target: target.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error came from the remote store rather than local input.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::NotFound { .. } | Self::Request { .. }
        )
    }
}
