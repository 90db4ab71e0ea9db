use mstress_core::errors::{ErrorInfo, MstressError};

/// Keeps the finite entries of `values`, preserving order.
pub fn finite_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|value| value.is_finite()).collect()
}

/// Parses a textual list of numbers such as `"1, 2.5 3"`, `"[1;2]"` or
/// `"c(0.1, 1, 10)"`.
///
/// Entries may be separated by commas, semicolons or whitespace. Empty input
/// yields an empty vector.
pub fn parse_vector(text: &str) -> Result<Vec<f64>, MstressError> {
    let body = strip_wrapper(text.trim());
    body.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(idx, token)| {
            token.parse::<f64>().map_err(|err| {
                MstressError::Parse(
                    ErrorInfo::new("num.parse_vector", "token is not a number")
                        .with_context("token", token)
                        .with_context("position", idx)
                        .with_hint(err.to_string()),
                )
            })
        })
        .collect()
}

fn strip_wrapper(text: &str) -> &str {
    for (open, close) in [("c(", ")"), ("(", ")"), ("[", "]")] {
        if let Some(inner) = text
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return inner;
        }
    }
    text
}
