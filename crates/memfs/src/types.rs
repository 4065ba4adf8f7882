//! Result types produced by the search engine.

use serde::Serialize;

use crate::storage::FileId;

/// One grep hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub file_name: String,
    /// Absolute path of the file, e.g. `/docs/notes.txt`.
    pub file_path: String,
    /// 1-based.
    pub line_number: usize,
    pub matched_line: String,
    pub file_id: FileId,
}

/// What a grep request produced: the hits, or only their number when the
/// request asked for a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrepOutcome {
    Matches(Vec<MatchRecord>),
    Count(usize),
}

impl GrepOutcome {
    /// Number of hits, whichever form the outcome takes.
    pub fn match_count(&self) -> usize {
        match self {
            Self::Matches(records) => records.len(),
            Self::Count(count) => *count,
        }
    }

    pub fn records(&self) -> Option<&[MatchRecord]> {
        match self {
            Self::Matches(records) => Some(records),
            Self::Count(_) => None,
        }
    }
}
