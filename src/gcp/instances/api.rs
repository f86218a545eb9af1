//! Instance collection via the aggregated list endpoint

use crate::error::Result;
use crate::gcp::client::{skip_on_denied, GcpClient};

use super::models::{AggregatedInstancesResponse, Instance};

impl GcpClient {
    /// Collect every instance in a project across all zones
    ///
    /// One logical aggregated-list call, followed through its pagination
    /// tokens until exhausted. Each instance is stamped with its owning
    /// project id; the short zone name is stamped during page flattening.
    /// A project the caller cannot access or that does not exist (403/404)
    /// contributes an empty result; any other failure propagates.
    pub async fn list_instances(&self, project_id: &str) -> Result<Vec<Instance>> {
        let url = format!(
            "{}/compute/v1/projects/{}/aggregated/instances",
            self.compute_base(),
            project_id
        );
        let error_context = format!("instances for project '{}'", project_id);

        let mut instances = skip_on_denied(
            self.fetch_all_pages::<Instance, AggregatedInstancesResponse>(&url, &error_context)
                .await,
            &format!("project '{}'", project_id),
        )?;

        for instance in &mut instances {
            instance.project_id = project_id.to_string();
        }
        Ok(instances)
    }
}
