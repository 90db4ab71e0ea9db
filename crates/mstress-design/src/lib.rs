//! Reconstructs experimental-design labels (treatment type, ordinal level and
//! combined label) from raw per-observation exposure matrices.

pub mod exposure;
pub mod legend;
pub mod treatment;

pub use exposure::{annotate, ExposureMatrix, ANNOTATION_COLUMNS};
pub use legend::legend_labels;
pub use treatment::{infer, Treatment, TreatmentAssignment, TreatmentType, CONTROL, MIX};
