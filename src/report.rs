//! Report assembly
//!
//! Drives the hierarchy walk (folders, then projects per node, then
//! instances per project) and flattens every instance into a report row.

use log::{debug, info};

use crate::error::Result;
use crate::gcp::GcpClient;
use crate::output::ReportRow;

/// Counts from a completed walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub folders: usize,
    pub projects: usize,
    pub instances: usize,
}

/// Walk the hierarchy under an organization and build the report rows
///
/// The full folder set is discovered first, with the organization root
/// appended as a synthetic node; each node then contributes its projects,
/// and each project its instances. Rows come back in traversal order.
/// Nothing is written here, so a propagated failure mid-walk leaves no
/// partial artifact behind.
pub async fn assemble_report(
    client: &GcpClient,
    org_id: &str,
) -> Result<(Vec<ReportRow>, ReportSummary)> {
    let root = format!("organizations/{}", org_id);

    let folders = client.list_all_folders(&root).await?;
    let mut nodes: Vec<String> = folders.iter().map(|f| f.name.clone()).collect();
    nodes.push(root);

    let mut summary = ReportSummary {
        folders: folders.len(),
        ..Default::default()
    };
    let mut rows: Vec<ReportRow> = Vec::new();

    for node in &nodes {
        let projects = client.list_projects(node).await?;
        debug!("Node '{}' has {} projects", node, projects.len());
        summary.projects += projects.len();

        for project in &projects {
            let instances = client.list_instances(&project.project_id).await?;
            debug!(
                "Project '{}' has {} instances",
                project.project_id,
                instances.len()
            );
            summary.instances += instances.len();
            rows.extend(instances.iter().map(ReportRow::new));
        }
    }

    info!(
        "Walked {} folders, {} projects, {} instances",
        summary.folders, summary.projects, summary.instances
    );
    Ok((rows, summary))
}
