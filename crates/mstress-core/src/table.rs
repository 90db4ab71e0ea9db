//! In-memory tabular data exchanged between the cleaning, inference and
//! persistence layers.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MstressError};

/// Column-labelled table of text cells.
///
/// Every row holds exactly `columns.len()` cells; the constructors and
/// [`Table::push_row`] enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Header names in order.
    pub columns: Vec<String>,
    /// Data rows, each as wide as the header.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, MstressError> {
        for (idx, row) in rows.iter().enumerate() {
            check_width(columns.len(), row, idx)?;
        }
        Ok(Self { columns, rows })
    }

    /// Re-checks every row against the header width.
    ///
    /// The fields are public, so a table mutated after construction may be
    /// ragged; writers call this before touching storage.
    pub fn check_rows(&self) -> Result<(), MstressError> {
        for (idx, row) in self.rows.iter().enumerate() {
            check_width(self.columns.len(), row, idx)?;
        }
        Ok(())
    }

    /// Creates a table with the given header and no rows.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Position of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cells of the named column in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, MstressError> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Like [`Table::column_index`] but fails with `InvalidInput`.
    pub fn require_column(&self, name: &str) -> Result<usize, MstressError> {
        self.column_index(name).ok_or_else(|| {
            MstressError::InvalidInput(
                ErrorInfo::new("table.unknown_column", "column not present in table")
                    .with_context("column", name)
                    .with_hint(format!("available columns: {}", self.columns.join(", "))),
            )
        })
    }

    /// Names of all columns whose name contains `needle`, in header order.
    pub fn columns_containing(&self, needle: &str) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.contains(needle))
            .map(String::as_str)
            .collect()
    }

    /// Appends a row after checking its width.
    pub fn push_row<I, S>(&mut self, row: I) -> Result<(), MstressError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        check_width(self.columns.len(), &row, self.rows.len())?;
        self.rows.push(row);
        Ok(())
    }

    /// Stacks `other` below `self`. Both tables must share the same header.
    pub fn concat(&self, other: &Table) -> Result<Table, MstressError> {
        if self.columns != other.columns {
            return Err(MstressError::InvalidInput(
                ErrorInfo::new("table.header_mismatch", "tables have different columns")
                    .with_context("left", self.columns.join(","))
                    .with_context("right", other.columns.join(",")),
            ));
        }
        let mut rows = self.rows.clone();
        rows.extend(other.rows.iter().cloned());
        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }
}

fn check_width(expected: usize, row: &[String], idx: usize) -> Result<(), MstressError> {
    if row.len() != expected {
        return Err(MstressError::InvalidInput(
            ErrorInfo::new("table.row_width", "row width differs from header")
                .with_context("row", idx)
                .with_context("expected", expected)
                .with_context("actual", row.len()),
        ));
    }
    Ok(())
}
