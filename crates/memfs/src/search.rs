//! Grep over the namespace.
//!
//! This module provides:
//! - Single-file and folder searches over `NamespaceData`
//! - The request entry point used by `Namespace::grep`

mod engine;

pub use engine::{search_file, search_folder, search_index_data};
