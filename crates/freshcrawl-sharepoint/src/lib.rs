//! SharePoint document libraries as a remote tree.
//!
//! [`SharePointStore`] signs in and hands out a [`SharePointSession`] per
//! site. The session implements [`RemoteTreeClient`] over the REST API, one
//! blocking request per folder listing.
//!
//! ```no_run
//! use freshcrawl_core::{Credentials, RemoteStore, RemoteTreeClient, Settings};
//! use freshcrawl_sharepoint::SharePointStore;
//!
//! let store = SharePointStore::new(Settings::default())?;
//! let session = store.authenticate("axion", &Credentials::AccessToken("...".into()))?;
//! let listing = session.list_children("/sites/axion/Shared Documents")?;
//! println!("{} files", listing.files.len());
//! # Ok::<(), freshcrawl_core::CrawlError>(())
//! ```

mod auth;
mod client;
mod link;
mod wire;

pub use auth::{scope, token_endpoint};
pub use client::{SharePointSession, SharePointStore, folder_url, title_url};
pub use link::FolderLink;

pub use freshcrawl_core::{CrawlError, Credentials, RemoteStore, RemoteTreeClient};
