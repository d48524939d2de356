//! Output formatter implementations.

use colored::Colorize;
use serde::Serialize;

use crate::snapshot::{Flag, PathEntry, Summary};
use crate::Result;

use super::{OutputFormatter, Report};

/// Text shown in place of an empty segment's path.
const EMPTY_SEGMENT_LABEL: &str = "(empty segment)";

/// The path to show for an entry: its normalized form, or a placeholder for
/// empty segments.
#[must_use]
pub fn display_path(entry: &PathEntry) -> &str {
    if entry.is_empty_segment() {
        EMPTY_SEGMENT_LABEL
    } else {
        entry.normalized()
    }
}

fn flag_list(entry: &PathEntry) -> String {
    entry
        .flags()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sectioned, human-readable report.
///
/// Colors: red for broken entries, yellow for duplicates, magenta for
/// shadowed entries, in that priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanFormatter {
    color: bool,
}

impl HumanFormatter {
    /// Create a formatter; `color` switches ANSI styling on.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, entry: &PathEntry) -> String {
        let text = display_path(entry);
        if !self.color {
            return text.to_string();
        }
        if entry.is_broken() {
            text.red().to_string()
        } else if entry.duplicate_of().is_some() {
            text.yellow().to_string()
        } else if entry.shadowed_by().is_some() {
            text.magenta().to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, lines: &mut Vec<String>, title: &str) {
        let underline = "-".repeat(title.chars().count());
        if self.color {
            lines.push(title.bold().to_string());
        } else {
            lines.push(title.to_string());
        }
        lines.push(underline);
    }
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let snapshot = report.snapshot;
        let summary = snapshot.summary();
        let mut lines = vec![
            "PATH report".to_string(),
            format!("Entries: {}", snapshot.len()),
            String::new(),
        ];

        self.heading(&mut lines, "Summary");
        lines.push(format!("Total entries         : {}", summary.total_entries));
        lines.push(format!("Broken / missing dirs : {}", summary.broken.len()));
        lines.push(format!("Duplicates            : {}", summary.duplicates.len()));
        lines.push(format!("Shadowed (heuristic)  : {}", summary.shadowed.len()));
        lines.push(String::new());

        self.heading(&mut lines, "Ordered PATH entries");
        for entry in snapshot.entries() {
            lines.push(format!("{:02}. {}", entry.index(), self.paint(entry)));
            lines.push(format!("    Category: {}", entry.category()));
            lines.push(format!("    Reason  : {}", entry.reason()));
            let flags = flag_list(entry);
            if !flags.is_empty() {
                lines.push(format!("    Flags   : {flags}"));
            }
            lines.push(String::new());
        }

        self.heading(&mut lines, "Grouped by category");
        for (category, indices) in snapshot.groups() {
            lines.push(format!("{category} ({})", indices.len()));
            for entry in snapshot.in_category(*category) {
                let flags = flag_list(entry);
                let suffix = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" [{flags}]")
                };
                lines.push(format!(
                    "  - {:02}. {}{suffix}",
                    entry.index(),
                    self.paint(entry)
                ));
            }
            lines.push(String::new());
        }

        self.heading(&mut lines, "Raw PATH");
        lines.push(snapshot.raw().to_string());

        if let Some(log_file) = report.log_file {
            lines.push(String::new());
            lines.push(format!("Log written to: {}", log_file.display()));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(flatten)]
    entry: &'a PathEntry,
    flags: Vec<Flag>,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    #[serde(flatten)]
    summary: &'a Summary,
    log_file: Option<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    raw_path: &'a str,
    entries: Vec<JsonEntry<'a>>,
    summary: JsonSummary<'a>,
}

/// Formatter for JSON output.
///
/// The document has `raw_path`, one object per entry (all fields plus
/// `flags`), and a `summary` block with `total_entries`, `broken`,
/// `duplicates`, `shadowed` and `log_file`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let snapshot = report.snapshot;
        let document = JsonReport {
            raw_path: snapshot.raw(),
            entries: snapshot
                .entries()
                .iter()
                .map(|entry| JsonEntry {
                    entry,
                    flags: entry.flags(),
                })
                .collect(),
            summary: JsonSummary {
                summary: snapshot.summary(),
                log_file: report.log_file.map(|p| p.display().to_string()),
            },
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
