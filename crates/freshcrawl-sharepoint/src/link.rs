//! Folder links copied from a browser.
//!
//! Two shapes are understood:
//!
//! ```text
//! https://contoso.sharepoint.com/:f:/r/sites/axion/Shared%20Documents/Reports?csf=1&web=1
//! https://contoso.sharepoint.com/sites/axion/Shared%20Documents/Forms/AllItems.aspx?id=%2Fsites%2Faxion%2FShared%20Documents%2FReports
//! ```
//!
//! The first is what "Copy link" produces. The second is the address bar of a
//! library view, where the folder travels in the `id` parameter.

use url::Url;

use freshcrawl_core::{CrawlError, path};

/// Site and folder addressed by a browser link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderLink {
    /// Scheme and host, e.g. `https://contoso.sharepoint.com`.
    pub origin: String,
    /// Site name, the segment after `sites`.
    pub site: String,
    /// Decoded server-relative folder path, e.g. `/sites/axion/Shared Documents`.
    pub folder_path: String,
}

impl FolderLink {
    /// Parse a copied link.
    pub fn parse(link: &str) -> Result<Self, CrawlError> {
        let invalid = |reason: &str| CrawlError::InvalidLink {
            link: link.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(link.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("not a web address"));
        }

        let decoded = match url.query_pairs().find(|(key, _)| key == "id") {
            Some((_, id)) => id.into_owned(),
            None => urlencoding::decode(url.path())
                .map_err(|_| invalid("path is not valid UTF-8"))?
                .into_owned(),
        };

        let segments: Vec<&str> = decoded.split('/').filter(|s| !s.is_empty()).collect();
        let sites = segments
            .iter()
            .position(|s| s.eq_ignore_ascii_case("sites"))
            .ok_or_else(|| invalid("no sites segment"))?;
        let site = segments
            .get(sites + 1)
            .ok_or_else(|| invalid("missing site name"))?;

        let mut rest = &segments[sites + 2..];
        if rest.last().is_some_and(|last| last.ends_with(".aspx")) {
            rest = &rest[..rest.len() - 1];
            if rest.last().is_some_and(|last| *last == "Forms") {
                rest = &rest[..rest.len() - 1];
            }
        }

        let folder_path = rest
            .iter()
            .fold(format!("/sites/{site}"), |folder, segment| {
                path::join(&folder, segment)
            });

        Ok(Self {
            origin: url.origin().ascii_serialization(),
            site: site.to_string(),
            folder_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_link() {
        let link = FolderLink::parse(
            "https://contoso.sharepoint.com/:f:/r/sites/axion/Shared%20Documents/Reports/Q1%202024?csf=1&web=1&e=abc",
        )
        .unwrap();

        assert_eq!(link.origin, "https://contoso.sharepoint.com");
        assert_eq!(link.site, "axion");
        assert_eq!(link.folder_path, "/sites/axion/Shared Documents/Reports/Q1 2024");
    }

    #[test]
    fn test_trailing_slash_ignored() {
        let link = FolderLink::parse("https://contoso.sharepoint.com/sites/axion/Shared%20Documents/").unwrap();
        assert_eq!(link.folder_path, "/sites/axion/Shared Documents");
    }

    #[test]
    fn test_site_root_link() {
        let link = FolderLink::parse("https://contoso.sharepoint.com/sites/RUsers").unwrap();
        assert_eq!(link.site, "RUsers");
        assert_eq!(link.folder_path, "/sites/RUsers");
    }
}
