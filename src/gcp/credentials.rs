//! Access token resolution from multiple sources

use std::path::{Path, PathBuf};

use gcp_auth::{CustomServiceAccount, TokenProvider};
use log::debug;

use crate::config::{api, credentials};
use crate::error::{GcpError, Result};

/// Token resolution with fallback logic
pub struct CredentialResolver {
    key_file: Option<PathBuf>,
}

impl CredentialResolver {
    /// Create a resolver; `key_file` comes from the CLI flag or the
    /// GOOGLE_APPLICATION_CREDENTIALS environment variable
    pub fn new(key_file: Option<PathBuf>) -> Self {
        Self { key_file }
    }

    /// Resolve an access token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. GOOGLE_OAUTH_ACCESS_TOKEN environment variable
    /// 3. Service account key file, exchanged for a token
    pub async fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        // 1. CLI argument takes precedence
        if let Some(token) = cli_token {
            debug!("Using access token from CLI argument");
            return Ok(token.to_string());
        }

        // 2. Environment variable
        if let Ok(token) = std::env::var(credentials::TOKEN_ENV_VAR) {
            debug!(
                "Using access token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            return Ok(token);
        }

        // 3. Service account key file
        match &self.key_file {
            Some(path) => self.token_from_key_file(path).await,
            None => Err(GcpError::TokenNotFound(self.token_not_found_message())),
        }
    }

    /// Exchange a service account key for an access token
    async fn token_from_key_file(&self, path: &Path) -> Result<String> {
        debug!("Loading service account key from: {}", path.display());

        let account = CustomServiceAccount::from_file(path).map_err(|e| {
            GcpError::Credentials(format!(
                "Could not load service account key {}: {}",
                path.display(),
                e
            ))
        })?;

        let token = account.token(&[api::READ_ONLY_SCOPE]).await?;
        debug!("Obtained access token from service account key");
        Ok(token.as_str().to_string())
    }

    /// Generate helpful error message when no credential source is configured
    fn token_not_found_message(&self) -> String {
        format!(
            "No GCP credentials found. Please provide one of:\n\
             \n\
             1. CLI argument:      gce-explorer --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. Key file:          gce-explorer --key-file <PATH>  (or export {}=<PATH>)",
            credentials::TOKEN_ENV_VAR,
            credentials::KEY_FILE_ENV_VAR
        )
    }
}
