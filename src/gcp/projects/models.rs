//! Project data models

use serde::Deserialize;

use crate::gcp::traits::PagedResponse;

/// Project data from the Resource Manager v1 API
#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    #[serde(rename = "projectId")]
    pub project_id: String,

    pub name: Option<String>,

    #[serde(rename = "projectNumber")]
    pub project_number: Option<String>,

    #[serde(rename = "lifecycleState")]
    pub lifecycle_state: Option<String>,

    pub parent: Option<ResourceId>,
}

/// Parent reference on a project
#[derive(Deserialize, Debug, Clone)]
pub struct ResourceId {
    #[serde(rename = "type")]
    pub parent_type: Option<String>,

    pub id: Option<String>,
}

/// Response wrapper for the projects list endpoint
#[derive(Deserialize, Debug)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

impl PagedResponse<Project> for ProjectsResponse {
    fn into_items(self) -> Vec<Project> {
        self.projects
    }

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserialization() {
        let json = r#"{
            "projectNumber": "415104041262",
            "projectId": "my-project",
            "lifecycleState": "ACTIVE",
            "name": "My Project",
            "parent": {
                "type": "folder",
                "id": "123456"
            }
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_id, "my-project");
        assert_eq!(project.name.as_deref(), Some("My Project"));
        assert_eq!(project.project_number.as_deref(), Some("415104041262"));
        let parent = project.parent.unwrap();
        assert_eq!(parent.parent_type.as_deref(), Some("folder"));
        assert_eq!(parent.id.as_deref(), Some("123456"));
    }

    #[test]
    fn test_project_deserialization_minimal() {
        let project: Project = serde_json::from_str(r#"{"projectId": "p1"}"#).unwrap();
        assert_eq!(project.project_id, "p1");
        assert!(project.name.is_none());
        assert!(project.parent.is_none());
    }

    #[test]
    fn test_projects_response_without_projects_key() {
        let resp: ProjectsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.next_page_token().is_none());
        assert!(resp.into_items().is_empty());
    }

    #[test]
    fn test_projects_response_with_token() {
        let resp: ProjectsResponse = serde_json::from_value(serde_json::json!({
            "projects": [{"projectId": "p1"}, {"projectId": "p2"}],
            "nextPageToken": "tok"
        }))
        .unwrap();
        assert_eq!(resp.next_page_token(), Some("tok"));
        assert_eq!(resp.into_items().len(), 2);
    }
}
