//! Bridges between [`Table`]s and the inference input/output.

use mstress_core::errors::{ErrorInfo, MstressError};
use mstress_core::{AnalysisConfig, Table};

use crate::treatment::{infer, TreatmentAssignment};

/// Columns appended by [`annotate`], in order.
pub const ANNOTATION_COLUMNS: [&str; 3] = ["treatment_type", "treatment_level", "treatment"];

/// Per-observation dose vectors together with the stressors they refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureMatrix {
    stressors: Vec<String>,
    observations: Vec<Vec<f64>>,
}

impl ExposureMatrix {
    /// Extracts the named stressor columns of `table` as doses.
    ///
    /// Every selected cell must parse as a number; missing cells (per
    /// `config`) are rejected rather than guessed.
    pub fn from_table<S: AsRef<str>>(
        table: &Table,
        stressor_columns: &[S],
        config: &AnalysisConfig,
    ) -> Result<Self, MstressError> {
        let indices = stressor_columns
            .iter()
            .map(|name| table.require_column(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let mut observations = Vec::with_capacity(table.len());
        for (row_idx, row) in table.rows.iter().enumerate() {
            let mut doses = Vec::with_capacity(indices.len());
            for &col in &indices {
                doses.push(parse_dose(&row[col], row_idx, &table.columns[col], config)?);
            }
            observations.push(doses);
        }
        Ok(Self {
            stressors: stressor_columns
                .iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
            observations,
        })
    }

    pub fn stressors(&self) -> &[String] {
        &self.stressors
    }

    pub fn observations(&self) -> &[Vec<f64>] {
        &self.observations
    }

    /// Runs [`infer`] with the matrix's own stressor names.
    pub fn infer(&self) -> Result<TreatmentAssignment, MstressError> {
        infer(&self.observations, &self.stressors)
    }
}

fn parse_dose(
    cell: &str,
    row: usize,
    column: &str,
    config: &AnalysisConfig,
) -> Result<f64, MstressError> {
    let info = |message: &str| {
        ErrorInfo::new("design.dose_cell", message)
            .with_context("row", row)
            .with_context("column", column)
            .with_context("cell", cell)
    };
    if config.is_missing(cell) {
        return Err(MstressError::InvalidInput(
            info("dose cell is missing").with_hint("drop incomplete rows before inference"),
        ));
    }
    cell.trim()
        .parse::<f64>()
        .map_err(|_| MstressError::InvalidInput(info("dose cell is not a number")))
}

/// Returns a copy of `table` with the treatment columns appended.
pub fn annotate(table: &Table, assignment: &TreatmentAssignment) -> Result<Table, MstressError> {
    if table.len() != assignment.len() {
        return Err(MstressError::InvalidInput(
            ErrorInfo::new("design.annotate_rows", "assignment does not match table rows")
                .with_context("rows", table.len())
                .with_context("treatments", assignment.len()),
        ));
    }
    if let Some(existing) = ANNOTATION_COLUMNS
        .iter()
        .find(|column| table.column_index(column).is_some())
    {
        return Err(MstressError::InvalidInput(
            ErrorInfo::new("design.annotate_columns", "table already carries treatment columns")
                .with_context("column", existing),
        ));
    }
    let mut columns = table.columns.clone();
    columns.extend(ANNOTATION_COLUMNS.iter().map(|column| column.to_string()));
    let rows = table
        .rows
        .iter()
        .zip(assignment.iter())
        .map(|(row, treatment)| {
            let mut row = row.clone();
            row.push(treatment.kind.to_string());
            row.push(treatment.level.to_string());
            row.push(treatment.label.clone());
            row
        })
        .collect();
    Table::new(columns, rows)
}
