//! Missing-value handling for experiment tables.

use mstress_core::errors::MstressError;
use mstress_core::{AnalysisConfig, Table};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of [`drop_incomplete`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Rows without any missing cell, in their original order.
    pub table: Table,
    /// Number of rows removed.
    pub dropped: usize,
}

/// Keeps only the rows in which no cell is missing.
///
/// The number of removed rows is returned in the report; with
/// `config.verbose` it is also logged at `info` level.
pub fn drop_incomplete(table: &Table, config: &AnalysisConfig) -> CleanReport {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .filter(|row| !row.iter().any(|cell| config.is_missing(cell)))
        .cloned()
        .collect();
    let dropped = table.len() - rows.len();
    if config.verbose {
        info!(dropped, kept = rows.len(), "dropped incomplete rows");
    } else {
        debug!(dropped, kept = rows.len(), "dropped incomplete rows");
    }
    CleanReport {
        table: Table {
            columns: table.columns.clone(),
            rows,
        },
        dropped,
    }
}

/// Replaces missing cells in `columns` with `default`.
///
/// Other columns are left untouched, missing or not.
pub fn replace_missing<S: AsRef<str>>(
    table: &Table,
    columns: &[S],
    default: &str,
    config: &AnalysisConfig,
) -> Result<Table, MstressError> {
    let indices = columns
        .iter()
        .map(|name| table.require_column(name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let mut cleaned = table.clone();
    let mut replaced = 0usize;
    for row in &mut cleaned.rows {
        for &idx in &indices {
            if config.is_missing(&row[idx]) {
                row[idx] = default.to_string();
                replaced += 1;
            }
        }
    }
    debug!(replaced, columns = indices.len(), "replaced missing cells");
    Ok(cleaned)
}
