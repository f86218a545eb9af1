//! Project enumeration (Cloud Resource Manager v1)

mod api;
mod models;

pub use models::{Project, ProjectsResponse, ResourceId};
