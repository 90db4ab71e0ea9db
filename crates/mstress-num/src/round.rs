use mstress_core::errors::{ErrorInfo, MstressError};

/// Most significant digits an `f64` can carry; larger requests are clamped.
const MAX_DIGITS: u32 = 17;

/// Rounds `value` to `digits` significant digits.
///
/// Zero and non-finite values are returned unchanged. Digit counts above 17
/// are treated as 17.
pub fn signif(value: f64, digits: u32) -> Result<f64, MstressError> {
    check_digits(value, digits)?;
    if value == 0.0 || !value.is_finite() {
        return Ok(value);
    }
    let (mantissa, exponent) = scientific(value, digits);
    let text = format!("{mantissa}e{exponent}");
    text.parse::<f64>().map_err(|err| {
        MstressError::Parse(
            ErrorInfo::new("num.signif_parse", "rounded value did not parse back")
                .with_context("text", text)
                .with_hint(err.to_string()),
        )
    })
}

/// Formats `value` rounded to `digits` significant digits.
///
/// The decimal digits come straight from the rounded scientific form, so no
/// binary noise leaks into the output. Integral results carry no fractional
/// part: `2.0` becomes `"2"` and `1234.0` becomes `"1234"`.
pub fn format_signif(value: f64, digits: u32) -> Result<String, MstressError> {
    check_digits(value, digits)?;
    if !value.is_finite() {
        return Ok(value.to_string());
    }
    if value == 0.0 {
        return Ok("0".to_string());
    }
    let (mantissa, exponent) = scientific(value, digits);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa.as_str()),
    };
    let figures: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let (integer, fraction) = if exponent >= 0 {
        let split = exponent as usize + 1;
        if figures.len() > split {
            (figures[..split].to_string(), figures[split..].to_string())
        } else {
            (format!("{figures:0<split$}"), String::new())
        }
    } else {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        ("0".to_string(), format!("{zeros}{figures}"))
    };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        Ok(format!("{sign}{integer}"))
    } else {
        Ok(format!("{sign}{integer}.{fraction}"))
    }
}

fn check_digits(value: f64, digits: u32) -> Result<(), MstressError> {
    if digits == 0 {
        return Err(MstressError::InvalidInput(
            ErrorInfo::new("num.signif_digits", "significant digits must be > 0")
                .with_context("value", value),
        ));
    }
    Ok(())
}

/// Splits the `digits`-rounded scientific form of a finite, non-zero value
/// into its mantissa text (`"-4.57"`) and decimal exponent.
fn scientific(value: f64, digits: u32) -> (String, i32) {
    let precision = (digits.min(MAX_DIGITS) - 1) as usize;
    let text = format!("{value:.precision$e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (text, 0),
    }
}
