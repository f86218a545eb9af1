//! GCP API client module
//!
//! Thin read-only wrappers over the Cloud Resource Manager and Compute
//! Engine APIs: folder discovery, project enumeration, and aggregated
//! instance collection, all hanging off a shared authenticated client.

mod client;
mod credentials;
pub mod folders;
pub mod instances;
pub mod projects;
pub mod traits;

pub use client::GcpClient;
pub use credentials::CredentialResolver;
pub use folders::Folder;
pub use instances::Instance;
pub use projects::Project;
pub use traits::PagedResponse;
