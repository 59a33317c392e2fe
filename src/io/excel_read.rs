use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};
use crate::model::{Cell, Table};

/// Reads the first worksheet of an Excel workbook into a [`Table`]. The
/// first row of the sheet becomes the header; every data row is padded or
/// truncated to the header width.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_names = workbook.sheet_names().to_owned();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook contains no sheets".into()))?;
    let range = workbook
        .worksheet_range(first_sheet)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{first_sheet}'")))?
        .map_err(ToolError::from)?;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell_to_string(Some(cell)))
            .collect(),
        None => Vec::new(),
    };

    let data_rows = rows
        .map(|row| {
            let mut cells: Vec<Cell> = row.iter().map(convert_cell).collect();
            cells.resize(columns.len(), Cell::Empty);
            cells
        })
        .collect();

    Ok(Table {
        columns,
        rows: data_rows,
    })
}

fn convert_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::Empty => Cell::Empty,
        DataType::String(value) => Cell::Text(value.clone()),
        DataType::Float(value) => Cell::Number(*value),
        DataType::Int(value) => Cell::Number(*value as f64),
        DataType::Bool(value) => Cell::Bool(*value),
        DataType::DateTime(value) => Cell::DateTime(*value),
        other => Cell::Text(other.to_string()),
    }
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_keep_their_excel_value_types() {
        assert_eq!(convert_cell(&DataType::String("a".into())), Cell::Text("a".into()));
        assert_eq!(convert_cell(&DataType::Float(2.5)), Cell::Number(2.5));
        assert_eq!(convert_cell(&DataType::Int(3)), Cell::Number(3.0));
        assert_eq!(convert_cell(&DataType::Bool(true)), Cell::Bool(true));
        assert_eq!(convert_cell(&DataType::Empty), Cell::Empty);
    }

    #[test]
    fn datetime_cells_keep_their_serial_number() {
        assert_eq!(
            convert_cell(&DataType::DateTime(45_000.5)),
            Cell::DateTime(45_000.5)
        );
    }

    #[test]
    fn headers_stringify_numeric_cells() {
        assert_eq!(cell_to_string(Some(&DataType::Float(1.0))), "1");
        assert_eq!(cell_to_string(Some(&DataType::Int(7))), "7");
        assert_eq!(cell_to_string(None), "");
    }
}
