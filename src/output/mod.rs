//! Report output module
//!
//! Handles the spreadsheet artifact and the stdout formats: xlsx, CSV, table.

mod csv;
mod table;
mod xlsx;

use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::gcp::Instance;

pub use self::csv::CsvFormatter;
pub use self::table::TableFormatter;
pub use self::xlsx::XlsxFormatter;

/// Column headers, in report order
pub const COLUMNS: [&str; 9] = [
    "Instance ID",
    "Project ID",
    "Name",
    "Zone",
    "Machine type",
    "Internal IP",
    "External IP",
    "Labels",
    "Network Tags",
];

/// Trait for report formatters
pub trait Formatter {
    /// Format and emit the rows
    fn format(&self, rows: &[ReportRow]) -> Result<()>;
}

/// Flattened instance data for one report row
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub instance_id: String,
    pub project_id: String,
    pub name: String,
    pub zone: String,
    pub machine_type: String,
    pub internal_ip: String,
    pub external_ip: String,
    pub labels: String,
    pub network_tags: String,
}

impl ReportRow {
    /// Build a row from a collected instance
    pub fn new(instance: &Instance) -> Self {
        Self {
            instance_id: instance.id.clone(),
            project_id: instance.project_id.clone(),
            name: instance.name.clone(),
            zone: instance.zone.clone(),
            machine_type: instance.machine_type_short().to_string(),
            internal_ip: instance.internal_ip().to_string(),
            external_ip: instance.external_ip().to_string(),
            labels: instance.labels_display(),
            network_tags: instance.tags_display(),
        }
    }

    /// Cell values in column order
    pub fn fields(&self) -> [&str; 9] {
        [
            &self.instance_id,
            &self.project_id,
            &self.name,
            &self.zone,
            &self.machine_type,
            &self.internal_ip,
            &self.external_ip,
            &self.labels,
            &self.network_tags,
        ]
    }
}

/// Emit rows using the configured format
///
/// `output` is only used by the xlsx formatter; csv and table print to
/// stdout.
pub fn write_report(rows: &[ReportRow], format: &OutputFormat, output: &Path) -> Result<()> {
    match format {
        OutputFormat::Xlsx => XlsxFormatter::new(output).format(rows),
        OutputFormat::Csv => CsvFormatter.format(rows),
        OutputFormat::Table => TableFormatter.format(rows),
    }
}
