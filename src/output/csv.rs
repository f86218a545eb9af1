//! CSV output formatter

use super::{Formatter, ReportRow, COLUMNS};
use crate::error::Result;

/// Formatter for CSV output on stdout
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<()> {
        println!("{}", COLUMNS.join(","));

        for row in rows {
            let cells: Vec<String> = row.fields().iter().map(|v| escape_csv(v)).collect();
            println!("{}", cells.join(","));
        }
        Ok(())
    }
}

/// Escape a value for CSV output
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
