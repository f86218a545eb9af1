//! GCE Explorer - inventory Compute Engine instances across an organization
//!
//! Walks the GCP resource hierarchy (organization → folders → projects →
//! instances) with one call outstanding at a time and exports a flat
//! spreadsheet report.
//!
//! # Features
//!
//! - Recursive folder discovery from the organization root
//! - Per-folder project enumeration and per-project aggregated instance
//!   collection with automatic pagination
//! - Tolerant traversal: inaccessible folders/projects are skipped with a
//!   warning instead of aborting the run
//! - xlsx report (default), or CSV/table on stdout
//!
//! # Example
//!
//! ```bash
//! # Inventory an organization using a service account key
//! gce-explorer --org 123456789012 --key-file sa.json
//!
//! # Same, but print a table instead of writing the workbook
//! gce-explorer --org 123456789012 --format table
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gcp;
pub mod output;
pub mod report;
pub mod ui;

pub use cli::{Cli, OutputFormat};
pub use error::{GcpError, Result};
pub use gcp::{CredentialResolver, Folder, GcpClient, Instance, Project};
pub use output::{write_report, Formatter, ReportRow};
pub use report::{assemble_report, ReportSummary};
