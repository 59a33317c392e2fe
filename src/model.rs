use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell. The variants mirror the value types Excel can
/// hold so that merging preserves numbers as numbers rather than flattening
/// everything to text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Cell {
    /// Blank cell.
    Empty,
    /// Plain string value.
    Text(String),
    /// Numeric value. Integers are widened to floats, matching Excel.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Date or time value stored as an Excel serial number.
    DateTime(f64),
}

/// An in-memory spreadsheet table: one header row plus data rows. Rows are
/// normalised to the header width when the table is read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Ordered column names taken from the first row of the sheet.
    pub columns: Vec<String>,
    /// Data rows, each exactly `columns.len()` cells wide.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates a table with the given header and no rows.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Returns true when the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Summary of one merged source workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    /// Path of the source workbook.
    pub path: PathBuf,
    /// Number of data rows it contributed.
    pub rows: usize,
}

/// Summary of a completed merge, suitable for emitting as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Workbooks that contributed rows, in merge order. Skipped empty
    /// workbooks do not appear here.
    pub sources: Vec<SourceSummary>,
    /// The shared header of all merged workbooks.
    pub columns: Vec<String>,
    /// Total number of data rows in the output workbook.
    pub total_rows: usize,
}
