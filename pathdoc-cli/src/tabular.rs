//! CSV and TSV entry listings.

use pathdoc::output::{OutputFormatter, Report};
use pathdoc::{Error, PathEntry, Result};
use serde::Serialize;
use std::io;

/// One row per entry.
#[derive(Serialize)]
struct Row<'a> {
    index: usize,
    raw: &'a str,
    expanded: &'a str,
    normalized: &'a str,
    exists: bool,
    is_dir: bool,
    category: &'static str,
    reason: &'a str,
    flags: String,
}

impl<'a> From<&'a PathEntry> for Row<'a> {
    fn from(entry: &'a PathEntry) -> Self {
        Row {
            index: entry.index(),
            raw: entry.raw(),
            expanded: entry.expanded(),
            normalized: entry.normalized(),
            exists: entry.exists(),
            is_dir: entry.is_dir(),
            category: entry.category().label(),
            reason: entry.reason(),
            flags: entry
                .flags()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Delimited listing of the entries of a report, with a header row.
#[derive(Debug, Clone, Copy)]
pub struct TabularFormatter {
    delimiter: u8,
}

impl TabularFormatter {
    /// Comma-separated values.
    pub fn csv() -> Self {
        Self { delimiter: b',' }
    }

    /// Tab-separated values.
    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

/// Convert csv::Error to the library error type.
fn csv_error(e: csv::Error) -> Error {
    Error::Io(io::Error::other(e))
}

impl OutputFormatter for TabularFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        for entry in report.snapshot.entries() {
            writer.serialize(Row::from(entry)).map_err(csv_error)?;
        }
        // Headers come from the first serialized row; an empty PATH still gets one
        if report.snapshot.is_empty() {
            writer
                .write_record([
                    "index",
                    "raw",
                    "expanded",
                    "normalized",
                    "exists",
                    "is_dir",
                    "category",
                    "reason",
                    "flags",
                ])
                .map_err(csv_error)?;
        }

        let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
