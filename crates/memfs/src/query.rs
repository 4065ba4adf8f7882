//! Pattern handling for grep.
//!
//! - Search options (flag set plus optional targets)
//! - Line splitting
//! - Compile-once line matching with a literal fallback
//! - Console-style rendering of results

mod lines;
mod matcher;
mod options;
mod render;

pub use lines::split_lines;
pub use matcher::{matches_line, LineMatcher};
pub use options::{GrepFlags, SearchOptions};
pub use render::{render_outcome, NO_MATCHES};
