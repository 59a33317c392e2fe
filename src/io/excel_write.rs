use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::model::{Cell, Table};

/// Writes the provided table to the given path as a single-sheet workbook.
/// The header lands in row 0 and data rows follow, keeping each cell's
/// value type.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, header)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_idx = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_idx = col_idx as u16;
            match cell {
                Cell::Empty => {}
                Cell::Text(value) => {
                    worksheet.write_string(row_idx, col_idx, value)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row_idx, col_idx, *value)?;
                }
                Cell::Bool(value) => {
                    worksheet.write_boolean(row_idx, col_idx, *value)?;
                }
                Cell::DateTime(serial) => {
                    worksheet.write_number_with_format(
                        row_idx,
                        col_idx,
                        *serial,
                        &datetime_format,
                    )?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
