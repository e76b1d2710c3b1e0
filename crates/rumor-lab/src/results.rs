//! Results Table
//!
//! Append-only CSV output shared by every run in a batch. The header is
//! written exactly once, when the file does not yet exist; callers serialize
//! appends through a mutex so concurrent runs never interleave rows.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rumor_events::results::{ResultRow, CSV_HEADER};

/// Appends result rows to a CSV file, creating it (with header) on first
/// use.
#[derive(Debug)]
pub struct ResultsWriter {
    path: PathBuf,
}

impl ResultsWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, writing the header first if the file is new.
    pub fn append(&mut self, row: &ResultRow) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let needs_header = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_header {
            writeln!(file, "{CSV_HEADER}")?;
        }
        writeln!(file, "{}", row.to_csv())?;
        Ok(())
    }
}
