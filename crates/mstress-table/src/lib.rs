//! Tabular I/O for experiment data: missing-value cleaning, a reader for
//! CSV files carrying `#`-prefixed metadata lines, and the step-indexed
//! writer used to persist results across an iterative computation.

pub mod clean;
pub mod w3c;
pub mod writer;

pub use clean::{drop_incomplete, replace_missing, CleanReport};
pub use w3c::{parse_w3c, read_w3c, W3cDocument};
pub use writer::{persist, ResultSink};
