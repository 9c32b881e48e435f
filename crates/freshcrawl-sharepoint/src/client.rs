//! Blocking SharePoint REST client.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use freshcrawl_core::{
    CrawlError, Credentials, FolderListing, RemoteStore, RemoteTreeClient, Settings,
};

use crate::auth;
use crate::wire::{ErrorPayload, FolderPayload, WebInfo};

const NOMETADATA: &str = "application/json;odata=nometadata";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// URL returning the site title.
pub fn title_url(web_origin: &str, site: &str) -> String {
    format!(
        "{}/sites/{site}/_api/web?$select=Title",
        web_origin.trim_end_matches('/')
    )
}

/// URL listing one folder's files and subfolders.
///
/// The folder goes through a parameter alias so that quotes and `#`/`%`
/// characters in names survive.
pub fn folder_url(web_origin: &str, site: &str, folder_path: &str) -> String {
    let quoted = folder_path.replace('\'', "''");
    format!(
        "{}/sites/{site}/_api/web/GetFolderByServerRelativeUrl(@p)?@p='{}'&$expand=Files,Folders",
        web_origin.trim_end_matches('/'),
        urlencoding::encode(&quoted),
    )
}

/// Connection factory for one SharePoint tenant.
#[derive(Debug, Clone)]
pub struct SharePointStore {
    settings: Settings,
    http: Client,
}

impl SharePointStore {
    /// Create a store for the tenant described by `settings`.
    pub fn new(settings: Settings) -> Result<Self, CrawlError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("freshcrawl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CrawlError::invalid_config(format!("HTTP client: {e}")))?;
        Ok(Self { settings, http })
    }

    /// Settings this store talks with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl RemoteStore for SharePointStore {
    type Session = SharePointSession;

    fn authenticate(
        &self,
        site: &str,
        credentials: &Credentials,
    ) -> Result<SharePointSession, CrawlError> {
        let token = auth::acquire_token(&self.http, &self.settings, site, credentials)?;

        let mut session = SharePointSession {
            http: self.http.clone(),
            web_origin: self.settings.web_origin.clone(),
            site: site.to_string(),
            token,
            title: String::new(),
        };

        // A site that cannot be read with the new token counts as a failed sign-in.
        session.title = session.fetch_title().map_err(|e| match e {
            CrawlError::Authentication { .. } => e,
            other => CrawlError::Authentication {
                site: site.to_string(),
                message: other.to_string(),
            },
        })?;

        debug!(site, title = %session.title, "authenticated");
        Ok(session)
    }
}

/// Authenticated connection to one site.
#[derive(Clone)]
pub struct SharePointSession {
    http: Client,
    web_origin: String,
    site: String,
    token: String,
    title: String,
}

impl fmt::Debug for SharePointSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharePointSession")
            .field("web_origin", &self.web_origin)
            .field("site", &self.site)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl SharePointSession {
    /// Site name this session is bound to.
    pub fn site(&self) -> &str {
        &self.site
    }

    fn fetch_title(&self) -> Result<String, CrawlError> {
        let url = title_url(&self.web_origin, &self.site);
        let body = self.get(&url, &url)?;
        let web: WebInfo =
            serde_json::from_str(&body).map_err(|e| CrawlError::request(&url, e))?;
        Ok(web.title)
    }

    /// GET `url` and return the body. `target` names the resource in errors.
    fn get(&self, url: &str, target: &str) -> Result<String, CrawlError> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, NOMETADATA)
            .send()
            .map_err(|e| CrawlError::request(target, e))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| CrawlError::request(target, e))?;

        if status.is_success() {
            Ok(body)
        } else {
            warn!(%status, target, "request rejected");
            Err(status_error(status, &self.site, target, &body))
        }
    }
}

impl RemoteTreeClient for SharePointSession {
    fn list_children(&self, folder_path: &str) -> Result<FolderListing, CrawlError> {
        let url = folder_url(&self.web_origin, &self.site, folder_path);
        let body = self.get(&url, folder_path)?;
        let payload: FolderPayload =
            serde_json::from_str(&body).map_err(|e| CrawlError::request(folder_path, e))?;

        if !payload.exists {
            return Err(CrawlError::NotFound {
                path: folder_path.to_string(),
            });
        }
        Ok(payload.into())
    }

    fn site_title(&self) -> Result<String, CrawlError> {
        Ok(self.title.clone())
    }
}

/// Map a non-success response to an error.
pub(crate) fn status_error(
    status: StatusCode,
    site: &str,
    target: &str,
    body: &str,
) -> CrawlError {
    let payload = ErrorPayload::parse(body);
    let message = payload
        .as_ref()
        .map(|p| p.error.message.value.clone())
        .unwrap_or_else(|| status.to_string());

    let not_found = status == StatusCode::NOT_FOUND
        || payload.as_ref().is_some_and(ErrorPayload::is_not_found);

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        CrawlError::Authentication {
            site: site.to_string(),
            message,
        }
    } else if not_found {
        CrawlError::NotFound {
            path: target.to_string(),
        }
    } else {
        CrawlError::request(target, message)
    }
}
