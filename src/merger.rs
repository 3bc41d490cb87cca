//! Column-wise merge of two flat tables plus a readable rendering.

use std::fmt;

use anyhow::{bail, Result};

/// One typed value in a flat table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Num(f64),
}

impl Cell {
    pub fn from_text(value: Option<&str>) -> Cell {
        value.map_or(Cell::Empty, |s| Cell::Text(s.to_string()))
    }

    pub fn from_int(value: Option<i64>) -> Cell {
        value.map_or(Cell::Empty, Cell::Int)
    }

    pub fn from_num(value: Option<f64>) -> Cell {
        value.map_or(Cell::Empty, Cell::Num)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Num(v) => write!(f, "{v}"),
        }
    }
}

/// Named columns plus rows of cells. Every row holds `columns.len()` cells.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: &[&str], rows: Vec<Vec<Cell>>) -> Self {
        Self {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Concatenates `other`'s columns to the right of `self`, pairing rows
    /// purely by index.
    ///
    /// There is no join key, so the row counts must match exactly; anything
    /// else would pair cells across unrelated entities and is rejected.
    pub fn hcat(mut self, other: Table) -> Result<Table> {
        if self.rows.len() != other.rows.len() {
            bail!(
                "cannot merge tables positionally: {} rows vs {} rows",
                self.rows.len(),
                other.rows.len()
            );
        }
        self.columns.extend(other.columns);
        for (row, extra) in self.rows.iter_mut().zip(other.rows) {
            row.extend(extra);
        }
        Ok(self)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        let mut widths: Vec<usize> = self.columns.iter().map(String::len).collect();
        for row in &rendered {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        for (i, name) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{name:<width$}", width = widths[i])?;
        }
        writeln!(f)?;
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{cell:<width$}", width = widths[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
