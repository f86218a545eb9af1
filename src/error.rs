use std::fmt;

/// Custom error type for GCP operations
#[derive(Debug)]
pub enum GcpError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token exchange with the OAuth endpoint failed
    Auth(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse the service account key file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Failed to write the report artifact
    Output(String),
}

impl GcpError {
    /// True for the access-denied/not-found statuses the hierarchy walk
    /// skips over instead of aborting
    pub fn is_skippable(&self) -> bool {
        matches!(self, GcpError::Api { status: 403 | 404, .. })
    }
}

impl fmt::Display for GcpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GcpError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GcpError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GcpError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            GcpError::TokenNotFound(msg) => write!(f, "{}", msg),
            GcpError::Credentials(msg) => write!(f, "{}", msg),
            GcpError::Json(msg) => write!(f, "JSON error: {}", msg),
            GcpError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GcpError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for GcpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GcpError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GcpError {
    fn from(err: reqwest::Error) -> Self {
        GcpError::Http(err)
    }
}

impl From<serde_json::Error> for GcpError {
    fn from(err: serde_json::Error) -> Self {
        GcpError::Json(err.to_string())
    }
}

impl From<std::io::Error> for GcpError {
    fn from(err: std::io::Error) -> Self {
        GcpError::Output(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for GcpError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        GcpError::Output(err.to_string())
    }
}

impl From<gcp_auth::Error> for GcpError {
    fn from(err: gcp_auth::Error) -> Self {
        GcpError::Auth(err.to_string())
    }
}

/// Result type alias for GCP operations
pub type Result<T> = std::result::Result<T, GcpError>;
