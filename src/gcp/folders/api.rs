//! Folder listing and hierarchy descent

use std::collections::VecDeque;

use log::debug;

use crate::error::Result;
use crate::gcp::client::{skip_on_denied, GcpClient};

use super::models::{Folder, FoldersResponse};

impl GcpClient {
    /// List the immediate child folders of a hierarchy node
    ///
    /// `parent` is a node path like "organizations/123" or "folders/456".
    /// Strict: all failures propagate to the caller.
    pub async fn list_folders(&self, parent: &str) -> Result<Vec<Folder>> {
        let url = format!(
            "{}/v2/folders?parent={}",
            self.resource_manager_base(),
            urlencoding::encode(parent)
        );
        let error_context = format!("folders under '{}'", parent);

        self.fetch_all_pages::<Folder, FoldersResponse>(&url, &error_context)
            .await
    }

    /// Discover every folder reachable from `root`
    ///
    /// Walks the hierarchy with an explicit worklist. Each discovered folder
    /// is queued exactly once, so the result holds every reachable folder
    /// exactly once; traversal order is not part of the contract. Subtrees
    /// whose children cannot be listed (403/404) are pruned with a warning;
    /// any other failure propagates.
    pub async fn list_all_folders(&self, root: &str) -> Result<Vec<Folder>> {
        let mut discovered: Vec<Folder> = Vec::new();
        let mut pending: VecDeque<String> = VecDeque::from([root.to_string()]);

        while let Some(parent) = pending.pop_front() {
            let children = skip_on_denied(
                self.list_folders(&parent).await,
                &format!("parent '{}'", parent),
            )?;

            for child in children {
                debug!("Processing folder: {}", child.name);
                pending.push_back(child.name.clone());
                discovered.push(child);
            }
        }

        Ok(discovered)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::GcpError;
    use crate::gcp::GcpClient;

    fn folder_json(id: &str, display_name: &str) -> serde_json::Value {
        serde_json::json!({
            "name": format!("folders/{}", id),
            "displayName": display_name
        })
    }

    fn children_mock(parent: &str, folders: serde_json::Value) -> Mock {
        Mock::given(method("GET"))
            .and(path("/v2/folders"))
            .and(query_param("parent", parent))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "folders": folders
            })))
    }

    #[tokio::test]
    async fn test_list_folders_single_level() {
        let mock_server = MockServer::start().await;
        let client = GcpClient::test_client(&mock_server.uri());

        children_mock(
            "organizations/1",
            serde_json::json!([folder_json("10", "alpha"), folder_json("20", "beta")]),
        )
        .mount(&mock_server)
        .await;

        let folders = client.list_folders("organizations/1").await.unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].name, "folders/10");
        assert_eq!(folders[1].name, "folders/20");
    }

    #[tokio::test]
    async fn test_list_all_folders_visits_each_exactly_once() {
        let mock_server = MockServer::start().await;
        let client = GcpClient::test_client(&mock_server.uri());

        // organizations/1 -> folders/10, folders/20; folders/10 -> folders/30
        children_mock(
            "organizations/1",
            serde_json::json!([folder_json("10", "a"), folder_json("20", "b")]),
        )
        .mount(&mock_server)
        .await;
        children_mock(
            "folders/10",
            serde_json::json!([folder_json("30", "c")]),
        )
        .mount(&mock_server)
        .await;
        children_mock("folders/20", serde_json::json!([]))
            .mount(&mock_server)
            .await;
        children_mock("folders/30", serde_json::json!([]))
            .mount(&mock_server)
            .await;

        let folders = client.list_all_folders("organizations/1").await.unwrap();

        let mut names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["folders/10", "folders/20", "folders/30"]);
    }

    #[tokio::test]
    async fn test_list_all_folders_prunes_denied_subtree() {
        let mock_server = MockServer::start().await;
        let client = GcpClient::test_client(&mock_server.uri());

        children_mock(
            "organizations/1",
            serde_json::json!([folder_json("10", "a"), folder_json("20", "b")]),
        )
        .mount(&mock_server)
        .await;
        // Listing children of folders/10 is forbidden; its subtree is pruned
        Mock::given(method("GET"))
            .and(path("/v2/folders"))
            .and(query_param("parent", "folders/10"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;
        children_mock("folders/20", serde_json::json!([]))
            .mount(&mock_server)
            .await;

        let folders = client.list_all_folders("organizations/1").await.unwrap();

        // Both children are still discovered; only 10's descendants are lost
        assert_eq!(folders.len(), 2);
    }

    #[tokio::test]
    async fn test_list_all_folders_denied_root_yields_empty() {
        let mock_server = MockServer::start().await;
        let client = GcpClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/folders"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let folders = client.list_all_folders("organizations/1").await.unwrap();
        assert!(folders.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_folders_propagates_server_errors() {
        let mock_server = MockServer::start().await;
        let client = GcpClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/folders"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client.list_all_folders("organizations/1").await;
        match result.unwrap_err() {
            GcpError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("Expected GcpError::Api, got {:?}", other),
        }
    }
}
