//! Project listing by parent node

use crate::error::Result;
use crate::gcp::client::{skip_on_denied, GcpClient};

use super::models::{Project, ProjectsResponse};

impl GcpClient {
    /// List all projects directly under a hierarchy node
    ///
    /// `parent` is a node path like "organizations/123" or "folders/456";
    /// the listing filters on its trailing numeric id. A parent the caller
    /// cannot access or that does not exist (403/404) contributes an empty
    /// result; any other failure propagates.
    pub async fn list_projects(&self, parent: &str) -> Result<Vec<Project>> {
        let parent_id = parent.rsplit('/').next().unwrap_or(parent);
        let filter = format!("parent.id:{}", parent_id);
        let url = format!(
            "{}/v1/projects?filter={}",
            self.resource_manager_base(),
            urlencoding::encode(&filter)
        );
        let error_context = format!("projects under '{}'", parent);

        skip_on_denied(
            self.fetch_all_pages::<Project, ProjectsResponse>(&url, &error_context)
                .await,
            &format!("parent '{}'", parent),
        )
    }
}
