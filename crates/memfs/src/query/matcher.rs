//! Compiled line matcher for grep.

use memchr::memmem;
use regex::{Regex, RegexBuilder};

use super::options::SearchOptions;

#[derive(Debug, Clone)]
enum Strategy {
    Regex(Regex),
    /// Plain containment; used when the pattern is not a valid regex.
    /// The needle is already lowercased when `case_insensitive` is set.
    Literal {
        finder: memmem::Finder<'static>,
        case_insensitive: bool,
    },
}

/// A pattern compiled once per grep request and applied to many lines.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    strategy: Strategy,
    invert: bool,
}

impl LineMatcher {
    /// Compiles `pattern` as a regular expression, falling back to substring
    /// matching when it doesn't parse. Never fails.
    pub fn compile(pattern: &str, options: &SearchOptions) -> Self {
        let case_insensitive = options.is_case_insensitive();
        let strategy = match RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
        {
            Ok(regex) => Strategy::Regex(regex),
            Err(error) => {
                log::debug!(
                    "grep pattern is not a regex, matching literally pattern={pattern:?} error={error}"
                );
                let needle = if case_insensitive {
                    pattern.to_lowercase()
                } else {
                    pattern.to_string()
                };
                Strategy::Literal {
                    finder: memmem::Finder::new(needle.as_bytes()).into_owned(),
                    case_insensitive,
                }
            }
        };

        Self {
            strategy,
            invert: options.is_invert_match(),
        }
    }

    /// Returns true if the pattern was compiled as a regular expression.
    pub fn is_regex(&self) -> bool {
        matches!(self.strategy, Strategy::Regex(_))
    }

    /// Whether `line` is selected, after applying inversion.
    pub fn matches(&self, line: &str) -> bool {
        let found = match &self.strategy {
            Strategy::Regex(regex) => regex.is_match(line),
            Strategy::Literal {
                finder,
                case_insensitive: true,
            } => finder.find(line.to_lowercase().as_bytes()).is_some(),
            Strategy::Literal { finder, .. } => finder.find(line.as_bytes()).is_some(),
        };
        found != self.invert
    }
}

/// One-shot form of `LineMatcher::compile(..).matches(..)`.
pub fn matches_line(line: &str, pattern: &str, options: &SearchOptions) -> bool {
    LineMatcher::compile(pattern, options).matches(line)
}
