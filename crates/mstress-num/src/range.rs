use mstress_core::errors::{ErrorInfo, MstressError};

/// Returns `length` values spaced evenly on a logarithmic scale between
/// `from` and `to`, both included.
///
/// Both bounds must be finite and strictly positive.
pub fn log_range(from: f64, to: f64, length: usize) -> Result<Vec<f64>, MstressError> {
    for (name, bound) in [("from", from), ("to", to)] {
        if !bound.is_finite() || bound <= 0.0 {
            return Err(MstressError::Arithmetic(
                ErrorInfo::new("num.log_range", "logarithmic range bounds must be positive")
                    .with_context(name, bound)
                    .with_hint("geometric ranges are undefined for non-positive bounds"),
            ));
        }
    }
    match length {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![from]),
        _ => {}
    }
    let start = from.ln();
    let step = (to.ln() - start) / (length - 1) as f64;
    let mut values: Vec<f64> = (0..length)
        .map(|idx| (start + step * idx as f64).exp())
        .collect();
    values[0] = from;
    values[length - 1] = to;
    Ok(values)
}
