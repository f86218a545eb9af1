/// Configuration constants for the GCP APIs
pub mod api {
    /// Base URL for the Cloud Resource Manager API (folders + projects)
    pub const RESOURCE_MANAGER_BASE: &str = "https://cloudresourcemanager.googleapis.com";

    /// Base URL for the Compute Engine API
    pub const COMPUTE_BASE: &str = "https://compute.googleapis.com";

    /// OAuth scope requested for the access token; the tool only lists
    pub const READ_ONLY_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform.read-only";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding a ready-made access token
    pub const TOKEN_ENV_VAR: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

    /// Environment variable pointing at a service account key file
    pub const KEY_FILE_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
}

/// Default values for CLI
pub mod defaults {
    /// Default report file name
    pub const OUTPUT_FILE: &str = "gcp_instances_info.xlsx";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
