//! Treatment inference over an ordered exposure matrix.
//!
//! Observation 0 is always the control. Every later observation is typed by
//! its active stressors (doses strictly above zero): exactly one active
//! stressor yields that stressor's name, anything else yields [`MIX`]. The
//! level counts consecutive observations of the same type and restarts at 1
//! whenever the type changes, so a type that reappears after an interruption
//! starts a new block rather than resuming the old count.

use std::fmt::{self, Display};

use mstress_core::errors::{ErrorInfo, MstressError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Type name of the control observation.
pub const CONTROL: &str = "co";
/// Type name of observations without exactly one active stressor.
pub const MIX: &str = "mix";

/// Treatment classification of a single observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentType {
    Control,
    /// Exactly one active stressor, identified by name.
    Single(String),
    /// Zero or several active stressors at a non-control position.
    Mix,
}

impl TreatmentType {
    pub fn as_str(&self) -> &str {
        match self {
            TreatmentType::Control => CONTROL,
            TreatmentType::Single(name) => name,
            TreatmentType::Mix => MIX,
        }
    }
}

impl Display for TreatmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inferred design metadata for one observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub kind: TreatmentType,
    /// Position within the current run of equal types; 0 for the control.
    pub level: u32,
    /// `kind` followed by `level`, e.g. `co0`, `A2`, `mix1`.
    pub label: String,
}

impl Treatment {
    fn new(kind: TreatmentType, level: u32) -> Self {
        let label = format!("{kind}{level}");
        Self { kind, level, label }
    }
}

/// Treatments co-indexed with the observations they were inferred from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentAssignment {
    pub treatments: Vec<Treatment>,
}

impl TreatmentAssignment {
    pub fn len(&self) -> usize {
        self.treatments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.treatments.is_empty()
    }

    pub fn types(&self) -> Vec<&str> {
        self.treatments.iter().map(|t| t.kind.as_str()).collect()
    }

    pub fn levels(&self) -> Vec<u32> {
        self.treatments.iter().map(|t| t.level).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.treatments.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Treatment> {
        self.treatments.iter()
    }
}

/// Infers treatment type, level and label for every observation.
///
/// `exposure` must hold at least the control observation, and every dose
/// vector must be as wide as `stressor_names`. Stressor names may not be
/// empty or collide with the reserved [`CONTROL`] and [`MIX`] types.
///
/// A non-control observation without any active dose is classified as
/// [`MIX`], not as a control.
pub fn infer<S: AsRef<str>>(
    exposure: &[Vec<f64>],
    stressor_names: &[S],
) -> Result<TreatmentAssignment, MstressError> {
    validate(exposure, stressor_names)?;
    debug!(
        observations = exposure.len(),
        stressors = stressor_names.len(),
        "inferring treatment design"
    );

    let mut treatments = Vec::with_capacity(exposure.len());
    treatments.push(Treatment::new(TreatmentType::Control, 0));
    let mut previous = TreatmentType::Control;
    let mut run: u32 = 0;
    for doses in &exposure[1..] {
        let current = classify(doses, stressor_names);
        if current == previous {
            run += 1;
        } else {
            run = 1;
        }
        treatments.push(Treatment::new(current.clone(), run));
        previous = current;
    }
    Ok(TreatmentAssignment { treatments })
}

fn classify<S: AsRef<str>>(doses: &[f64], stressor_names: &[S]) -> TreatmentType {
    let mut active = doses.iter().enumerate().filter(|(_, dose)| **dose > 0.0);
    match (active.next(), active.next()) {
        (Some((idx, _)), None) => TreatmentType::Single(stressor_names[idx].as_ref().to_string()),
        _ => TreatmentType::Mix,
    }
}

fn validate<S: AsRef<str>>(
    exposure: &[Vec<f64>],
    stressor_names: &[S],
) -> Result<(), MstressError> {
    if exposure.is_empty() {
        return Err(MstressError::InvalidInput(
            ErrorInfo::new("design.empty_exposure", "exposure matrix has no observations")
                .with_hint("row 0 must hold the control observation"),
        ));
    }
    for (idx, name) in stressor_names.iter().enumerate() {
        let name = name.as_ref();
        if name.is_empty() || name == CONTROL || name == MIX {
            return Err(MstressError::InvalidInput(
                ErrorInfo::new("design.reserved_name", "stressor name is empty or reserved")
                    .with_context("stressor", idx)
                    .with_context("name", name)
                    .with_hint(format!("`{CONTROL}` and `{MIX}` are treatment types")),
            ));
        }
    }
    for (row, doses) in exposure.iter().enumerate() {
        if doses.len() != stressor_names.len() {
            return Err(MstressError::InvalidInput(
                ErrorInfo::new(
                    "design.dimension_mismatch",
                    "dose vector width differs from stressor count",
                )
                .with_context("row", row)
                .with_context("doses", doses.len())
                .with_context("stressors", stressor_names.len()),
            ));
        }
    }
    Ok(())
}
