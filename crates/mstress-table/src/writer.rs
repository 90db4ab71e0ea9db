//! Step-indexed persistence of result tables.
//!
//! Step 1 truncates the destination and writes the header followed by the
//! rows. Every later step appends rows only, and refuses to run when the
//! destination does not exist yet: a missing file at step > 1 means the
//! caller skipped step 1, and recreating it would silently drop earlier
//! results. Calls for one destination must come from a single writer in
//! increasing step order.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use mstress_core::errors::{ErrorInfo, MstressError};
use mstress_core::Table;
use tracing::debug;

/// Destination for persisted tables; the variant fixes the delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSink {
    Csv(PathBuf),
    Tsv(PathBuf),
}

impl ResultSink {
    /// Chooses the sink from the file extension: `tsv`, `tab` and `txt`
    /// are tab separated, everything else is comma separated.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("tsv") | Some("tab") | Some("txt") => ResultSink::Tsv(path),
            _ => ResultSink::Csv(path),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ResultSink::Csv(path) | ResultSink::Tsv(path) => path,
        }
    }

    fn delimiter(&self) -> u8 {
        match self {
            ResultSink::Csv(_) => b',',
            ResultSink::Tsv(_) => b'\t',
        }
    }

    /// Writes (`step == 1`) or appends (`step > 1`) `table`.
    ///
    /// The table is validated before the destination is opened, so a
    /// rejected call leaves storage untouched.
    pub fn persist(&self, table: &Table, step: usize) -> Result<(), MstressError> {
        let path = self.path();
        if step == 0 {
            return Err(MstressError::InvalidInput(
                ErrorInfo::new("writer.step", "step index is 1-based")
                    .with_context("path", path.display())
                    .with_context("step", step),
            ));
        }
        check_table(table, path)?;
        if step == 1 {
            self.initialize(table)?;
        } else {
            self.append(table, step)?;
        }
        debug!(path = %path.display(), step, rows = table.len(), "persisted result table");
        Ok(())
    }

    fn initialize(&self, table: &Table) -> Result<(), MstressError> {
        let path = self.path();
        ensure_parent(path)?;
        let file = File::create(path).map_err(|err| {
            MstressError::Io(
                ErrorInfo::new("writer.create", "failed to create result file")
                    .with_context("path", path.display())
                    .with_hint(err.to_string()),
            )
        })?;
        let mut writer = self.csv_writer(file);
        writer
            .write_record(&table.columns)
            .map_err(|err| wrap_csv("writer.header", path, err))?;
        write_rows(&mut writer, table, path)
    }

    fn append(&self, table: &Table, step: usize) -> Result<(), MstressError> {
        let path = self.path();
        if !path.exists() {
            return Err(MstressError::MissingPrerequisite(
                ErrorInfo::new("writer.missing_prerequisite", "append requested before step 1")
                    .with_context("path", path.display())
                    .with_context("step", step)
                    .with_hint("persist the first table with step 1"),
            ));
        }
        let width = self.stored_width(step)?;
        if width != table.width() {
            return Err(MstressError::InvalidInput(
                ErrorInfo::new("writer.width_mismatch", "table width differs from stored header")
                    .with_context("path", path.display())
                    .with_context("stored", width)
                    .with_context("table", table.width()),
            ));
        }
        let file = OpenOptions::new().append(true).open(path).map_err(|err| {
            MstressError::Io(
                ErrorInfo::new("writer.open", "failed to open result file for append")
                    .with_context("path", path.display())
                    .with_hint(err.to_string()),
            )
        })?;
        let mut writer = self.csv_writer(file);
        write_rows(&mut writer, table, path)
    }

    fn stored_width(&self, step: usize) -> Result<usize, MstressError> {
        let path = self.path();
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter())
            .from_path(path)
            .map_err(|err| wrap_csv("writer.read_header", path, err))?;
        match reader.records().next() {
            Some(record) => Ok(record
                .map_err(|err| wrap_csv("writer.read_header", path, err))?
                .len()),
            None => Err(MstressError::MissingPrerequisite(
                ErrorInfo::new("writer.missing_header", "result file holds no header")
                    .with_context("path", path.display())
                    .with_context("step", step)
                    .with_hint("persist the first table with step 1"),
            )),
        }
    }

    fn csv_writer<W: Write>(&self, inner: W) -> csv::Writer<BufWriter<W>> {
        WriterBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter())
            .from_writer(BufWriter::new(inner))
    }
}

/// Rejects tables that cannot round-trip through storage: no columns (the
/// header would be a lone empty field) or rows of the wrong width.
fn check_table(table: &Table, path: &Path) -> Result<(), MstressError> {
    if table.width() == 0 {
        return Err(MstressError::InvalidInput(
            ErrorInfo::new("writer.empty_header", "table has no columns")
                .with_context("path", path.display()),
        ));
    }
    table.check_rows()
}

/// Persists `table` to `path` at the given 1-based `step`.
///
/// See [`ResultSink::persist`]; the sink is chosen with
/// [`ResultSink::from_path`].
pub fn persist(path: &Path, table: &Table, step: usize) -> Result<(), MstressError> {
    ResultSink::from_path(path).persist(table, step)
}

fn write_rows<W: Write>(
    writer: &mut csv::Writer<W>,
    table: &Table,
    path: &Path,
) -> Result<(), MstressError> {
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|err| wrap_csv("writer.row", path, err))?;
    }
    writer.flush().map_err(|err| {
        MstressError::Io(
            ErrorInfo::new("writer.flush", "failed to flush result file")
                .with_context("path", path.display())
                .with_hint(err.to_string()),
        )
    })
}

fn ensure_parent(path: &Path) -> Result<(), MstressError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            MstressError::Io(
                ErrorInfo::new("writer.create_dir", "failed to create result directory")
                    .with_context("path", parent.display())
                    .with_hint(err.to_string()),
            )
        })?;
    }
    Ok(())
}

fn wrap_csv(code: &str, path: &Path, err: csv::Error) -> MstressError {
    MstressError::Io(
        ErrorInfo::new(code, "CSV result file failure")
            .with_context("path", path.display())
            .with_hint(err.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_follows_extension() {
        assert!(matches!(ResultSink::from_path("out/a.tsv"), ResultSink::Tsv(_)));
        assert!(matches!(ResultSink::from_path("out/a.txt"), ResultSink::Tsv(_)));
        assert!(matches!(ResultSink::from_path("out/a.csv"), ResultSink::Csv(_)));
        assert!(matches!(ResultSink::from_path("out/results"), ResultSink::Csv(_)));
    }
}
