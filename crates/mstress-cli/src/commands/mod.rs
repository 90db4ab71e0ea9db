pub mod append;
pub mod clean;
pub mod design;
pub mod labels;
