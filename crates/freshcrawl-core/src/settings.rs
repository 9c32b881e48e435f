//! User settings loaded from `config.toml`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CrawlError;
use crate::path;

/// Persistent settings for talking to one SharePoint tenant.
///
/// ```toml
/// web_origin = "https://contoso.sharepoint.com"
/// tenant = "contoso.onmicrosoft.com"
/// client_id = "00000000-0000-0000-0000-000000000000"
/// user_domain = "contoso.com"
///
/// [sites]
/// "Axion" = "axion"
/// "R Users" = "RUsers"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scheme and host of the tenant, without a trailing slash.
    pub web_origin: String,

    /// Azure AD tenant used for token requests.
    pub tenant: String,

    /// Public client application id used for password sign-in.
    pub client_id: String,

    /// Domain appended to usernames entered without one.
    pub user_domain: Option<String>,

    /// Document library path under a site, e.g. `/Shared Documents/`.
    pub library_path: String,

    /// Site menu: display title to site name, in menu order.
    pub sites: IndexMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            web_origin: "https://contoso.sharepoint.com".to_string(),
            tenant: "organizations".to_string(),
            client_id: String::new(),
            user_domain: None,
            library_path: "/Shared Documents/".to_string(),
            sites: IndexMap::new(),
        }
    }
}

impl Settings {
    /// Default location: `<config dir>/freshcrawl/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("freshcrawl").join("config.toml"))
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CrawlError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CrawlError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CrawlError::io(path, e))?;
        Self::from_toml(&raw).map_err(|e| match e {
            CrawlError::InvalidConfig { message } => {
                CrawlError::invalid_config(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, CrawlError> {
        let mut settings: Settings =
            toml::from_str(raw).map_err(|e| CrawlError::invalid_config(e.to_string()))?;
        settings.web_origin = settings.web_origin.trim_end_matches('/').to_string();
        Ok(settings)
    }

    /// Absolute URL of a site, e.g. `https://contoso.sharepoint.com/sites/axion`.
    pub fn site_url(&self, site: &str) -> String {
        format!("{}/sites/{site}", self.web_origin)
    }

    /// Server-relative path of a site, e.g. `/sites/axion`.
    pub fn site_root(site: &str) -> String {
        format!("/sites/{site}")
    }

    /// Server-relative path of a site's document library.
    pub fn library_root(&self, site: &str) -> String {
        path::normalize(&path::join(&Self::site_root(site), &self.library_path)).to_string()
    }

    /// Append the configured domain to a bare username.
    pub fn qualify_user(&self, username: &str) -> String {
        match &self.user_domain {
            Some(domain) if !username.contains('@') => {
                format!("{username}@{}", domain.trim_start_matches('@'))
            }
            _ => username.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings_keeps_site_order() {
        let settings = Settings::from_toml(
            r#"
            web_origin = "https://example.sharepoint.com/"
            user_domain = "example.com"

            [sites]
            "Zeta Team" = "zeta"
            "Alpha" = "alpha"
            "#,
        )
        .unwrap();

        assert_eq!(settings.web_origin, "https://example.sharepoint.com");
        let titles: Vec<&str> = settings.sites.keys().map(String::as_str).collect();
        assert_eq!(titles, ["Zeta Team", "Alpha"]);
        assert_eq!(settings.library_path, "/Shared Documents/");
    }

    #[test]
    fn test_library_root() {
        let settings = Settings::default();
        assert_eq!(settings.library_root("axion"), "/sites/axion/Shared Documents");
        assert_eq!(
            settings.site_url("axion"),
            "https://contoso.sharepoint.com/sites/axion"
        );
    }

    #[test]
    fn test_qualify_user() {
        let settings = Settings {
            user_domain: Some("@example.com".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.qualify_user("jdoe"), "jdoe@example.com");
        assert_eq!(settings.qualify_user("jdoe@other.org"), "jdoe@other.org");
        assert_eq!(Settings::default().qualify_user("jdoe"), "jdoe");
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_toml("sites = 3").unwrap_err();
        assert!(matches!(err, CrawlError::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "tenant = \"example.onmicrosoft.com\"\n").unwrap();

        let settings = Settings::load(Some(&file)).unwrap();
        assert_eq!(settings.tenant, "example.onmicrosoft.com");

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Settings::load(Some(&missing)),
            Err(CrawlError::Io { .. })
        ));
    }
}
