//! Numeric helpers used around dose-response analyses: geometric dose grids,
//! significant-digit rounding for display, and small vector utilities.

mod range;
mod round;
mod vector;

pub use range::log_range;
pub use round::{format_signif, signif};
pub use vector::{finite_values, parse_vector};
