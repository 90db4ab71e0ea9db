//! Reader for delimited text whose metadata lives in comment lines.
//!
//! ```text
//! # title: mesocosm run 4
//! # units=mg/L
//! Cu,UV,survival
//! 0,0,0.98
//! ```
//!
//! Every line starting with the configured comment prefix is metadata. Its
//! text is split at the first `:` or `=` into a trimmed key and value; a line
//! without either separator becomes a key with an empty value. The remaining
//! non-blank lines are the core data, header first. Lines that continue a
//! quoted multi-line field belong to the data, whatever they start with.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::ReaderBuilder;
use mstress_core::errors::{ErrorInfo, MstressError};
use mstress_core::{AnalysisConfig, Table};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Core data table plus the metadata collected from comment lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct W3cDocument {
    pub metadata: BTreeMap<String, String>,
    pub table: Table,
}

/// Reads and parses the file at `path`.
pub fn read_w3c(path: &Path, config: &AnalysisConfig) -> Result<W3cDocument, MstressError> {
    let file = File::open(path).map_err(|err| {
        MstressError::Io(
            ErrorInfo::new("w3c.open", "failed to open data file")
                .with_context("path", path.display())
                .with_hint(err.to_string()),
        )
    })?;
    parse_w3c(BufReader::new(file), config).map_err(|err| match err {
        MstressError::Parse(info) => MstressError::Parse(info.with_context("path", path.display())),
        other => other,
    })
}

/// Parses a metadata-annotated document from any buffered reader.
pub fn parse_w3c<R: BufRead>(
    reader: R,
    config: &AnalysisConfig,
) -> Result<W3cDocument, MstressError> {
    config.validate()?;
    let mut metadata = BTreeMap::new();
    let mut data = String::new();
    let mut in_quotes = false;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| {
            MstressError::Io(
                ErrorInfo::new("w3c.read", "failed to read line")
                    .with_context("line", line_no + 1)
                    .with_hint(err.to_string()),
            )
        })?;
        if in_quotes {
            // continuation of a quoted field: kept verbatim, even if blank or
            // starting with the comment prefix
            in_quotes ^= odd_quotes(&line);
            data.push_str(&line);
            data.push('\n');
            continue;
        }
        if let Some(comment) = line.trim_start().strip_prefix(config.comment_prefix.as_str()) {
            if let Some((key, value)) = split_metadata(comment) {
                metadata.insert(key, value);
            }
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        in_quotes = odd_quotes(&line);
        data.push_str(&line);
        data.push('\n');
    }

    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter_byte()?)
        .from_reader(data.as_bytes());
    let columns: Vec<String> = csv
        .headers()
        .map_err(|err| parse_error("w3c.header", err))?
        .iter()
        .map(str::to_string)
        .collect();
    if columns.is_empty() {
        return Err(MstressError::Parse(
            ErrorInfo::new("w3c.no_header", "document holds no header line")
                .with_context("metadata_lines", metadata.len()),
        ));
    }
    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record.map_err(|err| parse_error("w3c.row", err))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(
        columns = columns.len(),
        rows = rows.len(),
        metadata = metadata.len(),
        "parsed annotated table"
    );
    Ok(W3cDocument {
        metadata,
        table: Table::new(columns, rows)?,
    })
}

fn odd_quotes(line: &str) -> bool {
    line.matches('"').count() % 2 == 1
}

fn split_metadata(comment: &str) -> Option<(String, String)> {
    let comment = comment.trim();
    let (key, value) = match comment.find(|c: char| c == ':' || c == '=') {
        Some(pos) => (&comment[..pos], &comment[pos + 1..]),
        None => (comment, ""),
    };
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

fn parse_error(code: &str, err: csv::Error) -> MstressError {
    let mut info = ErrorInfo::new(code, "malformed delimited text").with_hint(err.to_string());
    if let Some(position) = err.position() {
        info = info.with_context("data_line", position.line());
    }
    MstressError::Parse(info)
}
