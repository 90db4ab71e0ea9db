//! Error families returned by every mstress library, each wrapping an
//! [`ErrorInfo`] payload that the CLI prints and tests match on by `code`.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and diagnostics carried by an [`MstressError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Dotted identifier such as `writer.step`, stable across releases.
    pub code: String,
    /// Sentence describing what went wrong.
    pub message: String,
    /// Offending values keyed by name, e.g. `path` or `row`.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What the caller can change to make the call succeed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `value` under `key`; a repeated key keeps the last value.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a remediation hint, replacing any earlier one.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Failure of an mstress operation, grouped by cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MstressError {
    /// Structurally malformed arguments.
    #[error("invalid input: {0}")]
    InvalidInput(ErrorInfo),
    /// An operation ran out of sequence (append before initial write).
    #[error("missing prerequisite: {0}")]
    MissingPrerequisite(ErrorInfo),
    /// Degenerate numeric input.
    #[error("arithmetic error: {0}")]
    Arithmetic(ErrorInfo),
    /// Filesystem failures.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Malformed delimited text, configuration or numeric tokens.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl MstressError {
    /// Shorthand for an [`MstressError::InvalidInput`] without context.
    pub fn invalid(code: &str, message: impl Into<String>) -> Self {
        MstressError::InvalidInput(ErrorInfo::new(code, message))
    }

    /// The payload regardless of family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MstressError::InvalidInput(info)
            | MstressError::MissingPrerequisite(info)
            | MstressError::Arithmetic(info)
            | MstressError::Io(info)
            | MstressError::Parse(info) => info,
        }
    }
}
