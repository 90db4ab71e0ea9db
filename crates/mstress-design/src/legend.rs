//! Legend labels for plotted dose or response values.

use std::collections::HashSet;

use mstress_core::errors::MstressError;
use mstress_num::{finite_values, format_signif};

/// Formats `values` to `digits` significant digits and returns the distinct
/// labels in order of first occurrence. Non-finite values are skipped.
pub fn legend_labels(values: &[f64], digits: u32) -> Result<Vec<String>, MstressError> {
    let mut seen = HashSet::new();
    let mut labels = Vec::new();
    for value in finite_values(values) {
        let label = format_signif(value, digits)?;
        if seen.insert(label.clone()) {
            labels.push(label);
        }
    }
    Ok(labels)
}
