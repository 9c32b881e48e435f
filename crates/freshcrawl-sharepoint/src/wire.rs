//! JSON payloads returned by the SharePoint REST API.
//!
//! Requests ask for `application/json;odata=nometadata`, so properties sit at
//! the top level of each object. Int64 values such as `Length` arrive as
//! strings in that format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use freshcrawl_core::{FolderListing, RemoteNode, Timestamps};

/// Response of `/_api/web?$select=Title`.
#[derive(Debug, Deserialize)]
pub(crate) struct WebInfo {
    #[serde(rename = "Title")]
    pub title: String,
}

/// Response of `GetFolderByServerRelativeUrl(...)?$expand=Files,Folders`.
#[derive(Debug, Deserialize)]
pub(crate) struct FolderPayload {
    #[serde(rename = "Exists", default = "default_exists")]
    pub exists: bool,
    #[serde(rename = "Files", default)]
    pub files: Vec<FileItem>,
    #[serde(rename = "Folders", default)]
    pub folders: Vec<FolderItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileItem {
    #[serde(rename = "ServerRelativeUrl")]
    pub server_relative_url: String,
    #[serde(rename = "Length", default, deserialize_with = "int64")]
    pub length: u64,
    #[serde(rename = "TimeCreated")]
    pub time_created: DateTime<Utc>,
    #[serde(rename = "TimeLastModified")]
    pub time_last_modified: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FolderItem {
    #[serde(rename = "ServerRelativeUrl")]
    pub server_relative_url: String,
    #[serde(rename = "TimeCreated")]
    pub time_created: DateTime<Utc>,
    #[serde(rename = "TimeLastModified")]
    pub time_last_modified: DateTime<Utc>,
}

/// Error body, e.g. `{"odata.error":{"code":"...","message":{"value":"..."}}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(rename = "odata.error")]
    pub error: ODataError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ODataError {
    #[serde(default)]
    pub code: String,
    pub message: ODataMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ODataMessage {
    pub value: String,
}

/// Token endpoint response, success or failure.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenPayload {
    pub access_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

fn default_exists() -> bool {
    true
}

fn int64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Int64 {
        Number(u64),
        Text(String),
    }

    match Int64::deserialize(deserializer)? {
        Int64::Number(n) => Ok(n),
        Int64::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

impl From<FileItem> for RemoteNode {
    fn from(item: FileItem) -> Self {
        RemoteNode::new_file(
            item.server_relative_url,
            item.length,
            Timestamps::new(item.time_created, item.time_last_modified),
        )
    }
}

impl From<FolderItem> for RemoteNode {
    fn from(item: FolderItem) -> Self {
        RemoteNode::new_folder(
            item.server_relative_url,
            Timestamps::new(item.time_created, item.time_last_modified),
        )
    }
}

impl From<FolderPayload> for FolderListing {
    fn from(payload: FolderPayload) -> Self {
        FolderListing {
            files: payload.files.into_iter().map(RemoteNode::from).collect(),
            folders: payload.folders.into_iter().map(RemoteNode::from).collect(),
        }
    }
}

impl ErrorPayload {
    /// Parse an error body, if it is one.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Whether the server reported a missing file or folder.
    pub fn is_not_found(&self) -> bool {
        self.error.code.contains("FileNotFoundException")
    }
}
