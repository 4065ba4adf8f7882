//! Plain-text rendering of grep results for console-style adapters.

use std::fmt::Write;

use crate::types::{GrepOutcome, MatchRecord};

use super::options::SearchOptions;

pub const NO_MATCHES: &str = "No matches found.";

/// Formats an outcome the way a terminal grep shows it: a `=== path ===`
/// header whenever the file changes (if `show_file_path`), then each line,
/// prefixed by `N: ` when `show_line_numbers` is set.
pub fn render_outcome(outcome: &GrepOutcome, options: &SearchOptions) -> String {
    match outcome {
        GrepOutcome::Count(0) => format!("{NO_MATCHES}\n"),
        GrepOutcome::Count(count) => format!("Total matches: {count}\n"),
        GrepOutcome::Matches(records) if records.is_empty() => format!("{NO_MATCHES}\n"),
        GrepOutcome::Matches(records) => render_matches(records, options),
    }
}

fn render_matches(records: &[MatchRecord], options: &SearchOptions) -> String {
    let mut out = String::new();
    let mut current_file = None;

    for record in records {
        if options.shows_file_path() && current_file != Some(record.file_id) {
            if current_file.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "=== {} ===", record.file_path);
            current_file = Some(record.file_id);
        }
        if options.shows_line_numbers() {
            let _ = write!(out, "{}: ", record.line_number);
        }
        out.push_str(&record.matched_line);
        out.push('\n');
    }

    out
}
