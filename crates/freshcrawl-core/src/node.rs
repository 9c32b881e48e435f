//! Remote file and folder node types.

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::path;

/// Creation and modification times reported by the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    /// Set once when the item is created.
    pub created: DateTime<Utc>,
    /// Last modification time, never earlier than `created` on a sane store.
    pub modified: DateTime<Utc>,
}

impl Timestamps {
    /// Create timestamps from creation and modification times.
    pub fn new(created: DateTime<Utc>, modified: DateTime<Utc>) -> Self {
        Self { created, modified }
    }

    /// Timestamps for an item that was never modified after creation.
    pub fn created_at(created: DateTime<Utc>) -> Self {
        Self {
            created,
            modified: created,
        }
    }
}

/// Type of remote node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Document in a library.
    File {
        /// Size in bytes as reported by the store.
        size: u64,
    },
    /// Folder in a library.
    Folder,
}

impl NodeKind {
    /// Check if this is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, NodeKind::Folder)
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File { .. })
    }
}

/// Read-only snapshot of one remote file or folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteNode {
    /// Display name (last path segment).
    pub name: CompactString,

    /// Absolute server-relative path, e.g. `/sites/axion/Shared Documents/a.docx`.
    pub path: String,

    /// Node type and associated metadata.
    pub kind: NodeKind,

    /// Remote timestamps.
    pub timestamps: Timestamps,
}

impl RemoteNode {
    /// Create a file node. The name is taken from the last path segment.
    pub fn new_file(path: impl Into<String>, size: u64, timestamps: Timestamps) -> Self {
        let path = path.into();
        Self {
            name: path::last_segment(&path).into(),
            path,
            kind: NodeKind::File { size },
            timestamps,
        }
    }

    /// Create a folder node. The name is taken from the last path segment.
    pub fn new_folder(path: impl Into<String>, timestamps: Timestamps) -> Self {
        let path = path::normalize(&path.into()).to_string();
        Self {
            name: path::last_segment(&path).into(),
            path,
            kind: NodeKind::Folder,
            timestamps,
        }
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// File size in bytes, zero for folders.
    pub fn size(&self) -> u64 {
        match self.kind {
            NodeKind::File { size } => size,
            NodeKind::Folder => 0,
        }
    }
}

/// Immediate children of one remote folder, in the order the store returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderListing {
    pub files: Vec<RemoteNode>,
    pub folders: Vec<RemoteNode>,
}

impl FolderListing {
    /// Create an empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the folder has no children at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    /// Total bytes of the files at this level.
    pub fn file_bytes(&self) -> u64 {
        self.files.iter().map(RemoteNode::size).sum()
    }
}
