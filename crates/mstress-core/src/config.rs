//! Analysis configuration stored as YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MstressError};

/// Settings shared by the reader, the cleaner and the label formatter.
///
/// Missing fields fall back to their defaults, so an empty YAML document is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Field delimiter of the core data section.
    #[serde(default = "AnalysisConfig::default_delimiter")]
    pub delimiter: char,
    /// Prefix marking metadata lines ahead of the core data.
    #[serde(default = "AnalysisConfig::default_comment_prefix")]
    pub comment_prefix: String,
    /// Cell values treated as missing in addition to blank cells.
    #[serde(default = "AnalysisConfig::default_missing_tokens")]
    pub missing_tokens: Vec<String>,
    /// Significant digits used when formatting legend labels.
    #[serde(default = "AnalysisConfig::default_significant_digits")]
    pub significant_digits: u32,
    /// Emit dropped-row diagnostics while cleaning.
    #[serde(default)]
    pub verbose: bool,
}

impl AnalysisConfig {
    const fn default_delimiter() -> char {
        ','
    }

    fn default_comment_prefix() -> String {
        "#".to_string()
    }

    fn default_missing_tokens() -> Vec<String> {
        vec!["NA".to_string(), "NaN".to_string(), "null".to_string()]
    }

    const fn default_significant_digits() -> u32 {
        3
    }

    /// Loads a configuration from YAML. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, MstressError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|err| {
            MstressError::Io(
                ErrorInfo::new("config.read", "failed to read configuration")
                    .with_context("path", path.display())
                    .with_hint(err.to_string()),
            )
        })?;
        let config = Self::from_yaml(&text).map_err(|err| match err {
            MstressError::Parse(info) => {
                MstressError::Parse(info.with_context("path", path.display()))
            }
            other => other,
        })?;
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, MstressError> {
        // serde_yaml maps an empty document to unit, not to an empty mapping
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(text).map_err(|err| {
                MstressError::Parse(
                    ErrorInfo::new("config.yaml", "invalid configuration")
                        .with_hint(err.to_string()),
                )
            })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the reader and formatter cannot honour.
    pub fn validate(&self) -> Result<(), MstressError> {
        self.delimiter_byte()?;
        if self.comment_prefix.is_empty() {
            return Err(MstressError::invalid(
                "config.comment_prefix",
                "comment_prefix must not be empty",
            ));
        }
        if self.significant_digits == 0 {
            return Err(MstressError::invalid(
                "config.significant_digits",
                "significant_digits must be > 0",
            ));
        }
        Ok(())
    }

    /// The delimiter as the single byte the CSV layer expects.
    pub fn delimiter_byte(&self) -> Result<u8, MstressError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(MstressError::InvalidInput(
                ErrorInfo::new("config.delimiter", "delimiter must be a single ASCII character")
                    .with_context("delimiter", self.delimiter),
            ))
        }
    }

    /// Whether a cell counts as missing: blank, or one of `missing_tokens`.
    pub fn is_missing(&self, cell: &str) -> bool {
        let trimmed = cell.trim();
        trimmed.is_empty() || self.missing_tokens.iter().any(|token| token == trimmed)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delimiter: Self::default_delimiter(),
            comment_prefix: Self::default_comment_prefix(),
            missing_tokens: Self::default_missing_tokens(),
            significant_digits: Self::default_significant_digits(),
            verbose: false,
        }
    }
}
