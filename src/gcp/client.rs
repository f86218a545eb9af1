//! Authenticated HTTP client for the GCP REST APIs

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::api;
use crate::error::{GcpError, Result};
use crate::gcp::traits::PagedResponse;

/// GCP API client
///
/// Holds the bearer token for the process lifetime; runs are short-lived,
/// so there is no refresh logic.
pub struct GcpClient {
    client: Client,
    token: String,
    resource_manager_base: String,
    compute_base: String,
}

impl GcpClient {
    /// Create a new client for the given access token
    pub fn new(token: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            resource_manager_base: api::RESOURCE_MANAGER_BASE.to_string(),
            compute_base: api::COMPUTE_BASE.to_string(),
        }
    }

    /// Create a client pointed at a custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub(crate) fn with_base_url(token: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            resource_manager_base: base_url.clone(),
            compute_base: base_url,
        }
    }

    /// Base URL for the Cloud Resource Manager API
    pub(crate) fn resource_manager_base(&self) -> &str {
        &self.resource_manager_base
    }

    /// Base URL for the Compute Engine API
    pub(crate) fn compute_base(&self) -> &str {
        &self.compute_base
    }

    /// Create a GET request builder with the bearer token attached
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(GcpError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch every page of a token-paginated list endpoint
    ///
    /// Requests pages sequentially, one outstanding call at a time, until
    /// the response carries no `nextPageToken`.
    ///
    /// # Arguments
    /// * `url` - full endpoint URL, optionally with query parameters
    /// * `error_context` - context for error messages (e.g. "folders under 'organizations/1'")
    ///
    /// # Type Parameters
    /// * `T` - the item type (e.g. Folder, Instance)
    /// * `R` - the response type that implements PagedResponse<T>
    pub(crate) async fn fetch_all_pages<T, R>(&self, url: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PagedResponse<T>,
    {
        // Detect if the URL already has query params
        let separator = if url.contains('?') { "&" } else { "?" };

        let mut all_items: Vec<T> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_num = 1u32;

        loop {
            let page_url = match &page_token {
                Some(token) => format!("{}{}pageToken={}", url, separator, urlencoding::encode(token)),
                None => url.to_string(),
            };

            debug!("Fetching page {} from: {}", page_num, page_url);

            let response = self.get(&page_url).send().await?;
            let page: R = self.parse_api_response(response, error_context).await?;

            page_token = page.next_page_token().map(str::to_string);
            all_items.extend(page.into_items());

            if page_token.is_none() {
                break;
            }
            page_num += 1;
        }

        debug!("Fetched {} total items for {}", all_items.len(), error_context);
        Ok(all_items)
    }
}

/// Downgrade an access-denied/not-found listing failure to an empty result
///
/// The walk tolerates branches the caller cannot see into: the node is
/// logged and contributes nothing. Anything else propagates and aborts
/// the run.
pub(crate) fn skip_on_denied<T>(result: Result<Vec<T>>, what: &str) -> Result<Vec<T>> {
    match result {
        Err(e) if e.is_skippable() => {
            warn!("Cannot access or find {}: {}. Skipping...", what, e);
            Ok(Vec::new())
        }
        other => other,
    }
}

#[cfg(test)]
impl GcpClient {
    /// Create a test client with mock base URL
    pub(crate) fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-token".to_string(), base_url.to_string())
    }
}
