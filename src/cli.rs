//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{credentials, defaults};
use crate::error::{GcpError, Result};

/// GCE Explorer CLI
#[derive(Parser, Debug)]
#[command(name = "gce-explorer")]
#[command(version)]
#[command(about = "Inventory Compute Engine instances across a GCP organization", long_about = None)]
pub struct Cli {
    /// Numeric organization id to walk (e.g. 123456789012)
    #[arg(short, long, env = "GCP_ORG_ID")]
    pub org: String,

    /// Service account key file (JSON)
    #[arg(short, long, env = credentials::KEY_FILE_ENV_VAR)]
    pub key_file: Option<PathBuf>,

    /// OAuth2 access token (overrides env vars and key file)
    #[arg(short = 't', long, env = credentials::TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Report file path (xlsx format only)
    #[arg(long, default_value = defaults::OUTPUT_FILE)]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Xlsx)]
    pub format: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Disable the progress spinner
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// Validate arguments before any API call is made
    pub fn validate(&self) -> Result<()> {
        if self.org.is_empty() || !self.org.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GcpError::Config(format!(
                "organization id must be numeric, got '{}'",
                self.org
            )));
        }
        Ok(())
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Spreadsheet file (default)
    Xlsx,
    /// Comma-separated values on stdout
    Csv,
    /// ASCII table on stdout
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Xlsx => write!(f, "xlsx"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
