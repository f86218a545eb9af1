//! Folder data models

use serde::Deserialize;

use crate::gcp::traits::PagedResponse;

/// Folder data from the Resource Manager v2 API
#[derive(Deserialize, Debug, Clone)]
pub struct Folder {
    /// Full resource name, e.g. "folders/123456"
    pub name: String,

    #[serde(rename = "displayName")]
    pub display_name: Option<String>,

    /// Resource name of the parent node
    pub parent: Option<String>,
}

impl Folder {
    /// Trailing numeric id of the folder resource name
    pub fn folder_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// Response wrapper for the folders list endpoint
#[derive(Deserialize, Debug)]
pub struct FoldersResponse {
    #[serde(default)]
    pub folders: Vec<Folder>,

    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

impl PagedResponse<Folder> for FoldersResponse {
    fn into_items(self) -> Vec<Folder> {
        self.folders
    }

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}
