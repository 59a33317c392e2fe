use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::error::{Result, ToolError};
use crate::io::{excel_read, excel_write};
use crate::model::{Cell, MergeReport, SourceSummary, Table};

/// A workbook that passed validation and will contribute rows to the merge.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    pub path: PathBuf,
    pub table: Table,
}

/// Merges the given workbooks into a single output workbook: every input
/// must share the header of the first non-empty input, rows are appended in
/// input order, and the first column is renumbered from 1.
#[instrument(
    level = "info",
    skip_all,
    fields(output = %output.display(), input_count = inputs.len())
)]
pub fn merge_workbooks(inputs: &[PathBuf], output: &Path) -> Result<MergeReport> {
    let loaded = load_tables(inputs)?;

    let sources: Vec<SourceSummary> = loaded
        .iter()
        .map(|entry| SourceSummary {
            path: entry.path.clone(),
            rows: entry.table.rows.len(),
        })
        .collect();

    let mut merged = concat_tables(loaded);
    info!(
        source_count = sources.len(),
        total_rows = merged.rows.len(),
        "concatenated input workbooks"
    );

    renumber_first_column(&mut merged);
    debug!(column = ?merged.columns.first(), "renumbered first column");

    excel_write::write_table(output, &merged)?;
    info!(path = %output.display(), "merged workbook written");

    Ok(MergeReport {
        sources,
        columns: merged.columns,
        total_rows: merged.rows.len(),
    })
}

/// Loads and validates the input workbooks. Workbooks without data rows are
/// skipped with a warning before any header comparison; the first workbook
/// that does hold rows defines the header every later one must match.
pub fn load_tables(paths: &[PathBuf]) -> Result<Vec<LoadedTable>> {
    if paths.is_empty() {
        return Err(ToolError::NoInputs);
    }

    let mut loaded: Vec<LoadedTable> = Vec::new();
    let mut header: Option<Vec<String>> = None;

    for path in paths {
        if !path.exists() {
            return Err(ToolError::MissingInput(path.clone()));
        }

        let table = excel_read::read_table(path)?;
        if table.is_empty() {
            warn!(path = %path.display(), "workbook has no data rows, skipping");
            continue;
        }

        match &header {
            None => {
                debug!(columns = ?table.columns, "header taken from first workbook");
                header = Some(table.columns.clone());
            }
            Some(expected) if *expected != table.columns => {
                return Err(ToolError::HeaderMismatch {
                    path: path.clone(),
                    expected: expected.clone(),
                    found: table.columns,
                });
            }
            Some(_) => {}
        }

        info!(path = %path.display(), rows = table.rows.len(), "loaded workbook");
        loaded.push(LoadedTable {
            path: path.clone(),
            table,
        });
    }

    if loaded.is_empty() {
        return Err(ToolError::NoUsableData);
    }

    Ok(loaded)
}

/// Appends the rows of every loaded workbook under the shared header. The
/// caller guarantees the headers are equal.
pub fn concat_tables(tables: Vec<LoadedTable>) -> Table {
    let mut iter = tables.into_iter();
    let mut merged = match iter.next() {
        Some(first) => first.table,
        None => Table::new(Vec::new()),
    };

    for entry in iter {
        merged.rows.extend(entry.table.rows);
    }

    merged
}

/// Overwrites the first column with the sequence `1..=N`. A table without
/// columns is left untouched.
pub fn renumber_first_column(table: &mut Table) {
    if table.columns.is_empty() {
        return;
    }

    for (index, row) in table.rows.iter_mut().enumerate() {
        row[0] = Cell::Number((index + 1) as f64);
    }
}
