//! Spreadsheet serialization of a merged table.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::merger::{Cell, Table};

/// Writes the table to a single-sheet workbook: header row from the
/// column names, then one row per table row, cells typed as text or
/// number. Fails if the destination cannot be written.
pub fn write_xlsx(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in table.columns.iter().enumerate() {
        sheet.write_string(0, col as u16, name)?;
    }
    for (row, cells) in table.rows.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Empty => {}
                Cell::Text(s) => {
                    sheet.write_string(row, col, s)?;
                }
                Cell::Int(v) => {
                    sheet.write_number(row, col, *v as f64)?;
                }
                Cell::Num(v) => {
                    sheet.write_number(row, col, *v)?;
                }
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("saving {}", path.display()))?;
    Ok(())
}
