//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::{Formatter, ReportRow, COLUMNS};
use crate::error::Result;

/// Formatter for ASCII table output on stdout
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<()> {
        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(COLUMNS.to_vec());

        for row in rows {
            table.add_row(row.fields().to_vec());
        }

        println!("{}", table);
        Ok(())
    }
}
