//! Spreadsheet output formatter

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};

use super::{Formatter, ReportRow, COLUMNS};
use crate::error::Result;

/// Formatter writing the report workbook to disk
///
/// One header row, one row per instance, no index column. An existing
/// file at the target path is overwritten.
pub struct XlsxFormatter {
    path: PathBuf,
}

impl XlsxFormatter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Formatter for XlsxFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        for (col, header) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (row_idx, row) in rows.iter().enumerate() {
            for (col, value) in row.fields().iter().enumerate() {
                worksheet.write_string((row_idx + 1) as u32, col as u16, *value)?;
            }
        }

        workbook.save(&self.path)?;
        Ok(())
    }
}
