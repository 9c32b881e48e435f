//! Collaborator traits for the remote document store.

use std::fmt;

use crate::error::CrawlError;
use crate::node::{FolderListing, RemoteNode};

/// Authenticated handle that can enumerate one site's folders.
pub trait RemoteTreeClient {
    /// List the immediate files and folders of `folder_path`.
    ///
    /// Fails with [`CrawlError::NotFound`] when the folder does not exist.
    fn list_children(&self, folder_path: &str) -> Result<FolderListing, CrawlError>;

    /// Human-readable title of the site.
    fn site_title(&self) -> Result<String, CrawlError>;

    /// List only the immediate subfolders of `folder_path`.
    fn list_subfolders(&self, folder_path: &str) -> Result<Vec<RemoteNode>, CrawlError> {
        Ok(self.list_children(folder_path)?.folders)
    }
}

impl<T: RemoteTreeClient + ?Sized> RemoteTreeClient for &T {
    fn list_children(&self, folder_path: &str) -> Result<FolderListing, CrawlError> {
        (**self).list_children(folder_path)
    }

    fn site_title(&self) -> Result<String, CrawlError> {
        (**self).site_title()
    }

    fn list_subfolders(&self, folder_path: &str) -> Result<Vec<RemoteNode>, CrawlError> {
        (**self).list_subfolders(folder_path)
    }
}

/// Entry point that turns credentials into an authenticated session.
pub trait RemoteStore {
    type Session: RemoteTreeClient;

    /// Authenticate against `site`.
    ///
    /// Fails with [`CrawlError::Authentication`] on bad credentials or an
    /// unreachable site.
    fn authenticate(&self, site: &str, credentials: &Credentials)
    -> Result<Self::Session, CrawlError>;
}

/// Credentials for establishing a session.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Username and password for a password grant.
    Password { username: String, password: String },
    /// A bearer token acquired elsewhere.
    AccessToken(String),
}

impl Credentials {
    /// Create password credentials.
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Account name, if known.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Password { username, .. } => Some(username),
            Self::AccessToken(_) => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::AccessToken(_) => f.debug_tuple("AccessToken").field(&"<redacted>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let creds = Credentials::password("jdoe@example.com", "hunter2");
        let shown = format!("{creds:?}");
        assert!(shown.contains("jdoe@example.com"));
        assert!(!shown.contains("hunter2"));

        let token = Credentials::AccessToken("eyJ0eXAi".to_string());
        assert!(!format!("{token:?}").contains("eyJ0eXAi"));
        assert_eq!(token.username(), None);
    }
}
