#![deny(missing_docs)]
#![doc = "Core error, table and configuration types shared by the mstress crates."]

pub mod config;
pub mod errors;
pub mod table;

pub use config::AnalysisConfig;
pub use errors::{ErrorInfo, MstressError};
pub use table::Table;
