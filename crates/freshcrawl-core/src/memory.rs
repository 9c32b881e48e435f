//! In-memory remote tree.
//!
//! `MemoryTree` implements the collaborator traits over a tree held in
//! memory. It records every listing call and can be told to fail at a given
//! folder, which makes traversal order and failure handling observable.

use std::cell::RefCell;
use std::collections::HashSet;

use indexmap::IndexMap;

use crate::client::{Credentials, RemoteStore, RemoteTreeClient};
use crate::error::CrawlError;
use crate::node::{FolderListing, RemoteNode, Timestamps};
use crate::path;

/// A remote tree held in memory.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    title: String,
    root: String,
    folders: IndexMap<String, FolderListing>,
    failing: HashSet<String>,
    password: Option<String>,
    listed: RefCell<Vec<String>>,
}

impl MemoryTree {
    /// Create a tree with an empty root folder.
    pub fn new(root: impl AsRef<str>) -> Self {
        let root = path::normalize(root.as_ref()).to_string();
        let mut folders = IndexMap::new();
        folders.insert(root.clone(), FolderListing::new());
        Self {
            title: "Memory".to_string(),
            root,
            folders,
            failing: HashSet::new(),
            password: None,
            listed: RefCell::new(Vec::new()),
        }
    }

    /// Set the site title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Require this password when authenticating.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Root folder path.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Add a folder under `parent` and return its path.
    pub fn add_folder(&mut self, parent: &str, name: &str, timestamps: Timestamps) -> String {
        let child = path::join(parent, name);
        let node = RemoteNode::new_folder(child.clone(), timestamps);
        self.folders
            .entry(path::normalize(parent).to_string())
            .or_default()
            .folders
            .push(node);
        self.folders.entry(child.clone()).or_default();
        child
    }

    /// Add a file under `parent` and return its path.
    pub fn add_file(&mut self, parent: &str, name: &str, size: u64, timestamps: Timestamps) -> String {
        let child = path::join(parent, name);
        let node = RemoteNode::new_file(child.clone(), size, timestamps);
        self.folders
            .entry(path::normalize(parent).to_string())
            .or_default()
            .files
            .push(node);
        child
    }

    /// Make listing `folder` fail with a request error.
    pub fn fail_at(&mut self, folder: &str) {
        self.failing.insert(path::normalize(folder).to_string());
    }

    /// Folders listed so far, in call order.
    pub fn listed(&self) -> Vec<String> {
        self.listed.borrow().clone()
    }
}

impl RemoteTreeClient for MemoryTree {
    fn list_children(&self, folder_path: &str) -> Result<FolderListing, CrawlError> {
        let key = path::normalize(folder_path);
        self.listed.borrow_mut().push(key.to_string());

        if self.failing.contains(key) {
            return Err(CrawlError::request(key, "simulated failure"));
        }
        self.folders
            .get(key)
            .cloned()
            .ok_or_else(|| CrawlError::NotFound {
                path: key.to_string(),
            })
    }

    fn site_title(&self) -> Result<String, CrawlError> {
        Ok(self.title.clone())
    }
}

impl RemoteStore for MemoryTree {
    type Session = MemoryTree;

    fn authenticate(&self, site: &str, credentials: &Credentials) -> Result<MemoryTree, CrawlError> {
        let accepted = match (&self.password, credentials) {
            (None, _) => true,
            (Some(expected), Credentials::Password { password, .. }) => expected == password,
            (Some(_), Credentials::AccessToken(_)) => false,
        };
        if !accepted {
            return Err(CrawlError::Authentication {
                site: site.to_string(),
                message: "invalid credentials".to_string(),
            });
        }
        Ok(self.clone())
    }
}
