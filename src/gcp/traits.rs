//! Common traits for GCP list APIs

/// Trait for API responses that carry a continuation token
///
/// GCP list endpoints return their items under a resource-specific key and
/// an optional `nextPageToken`. Implement this trait for any list-response
/// struct to enable use with `GcpClient::fetch_all_pages()`.
pub trait PagedResponse<T> {
    /// Consume self and return this page's items
    fn into_items(self) -> Vec<T>;

    /// Continuation token for the next page, if any
    fn next_page_token(&self) -> Option<&str>;
}
