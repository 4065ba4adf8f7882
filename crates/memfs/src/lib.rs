//! In-memory hierarchical namespace with grep-style content search.
//!
//! This crate provides:
//! - Arena storage for folders and files, addressed by typed ids
//! - A tree index with cascading folder removal
//! - A current-directory cursor and computed absolute paths
//! - Line-oriented regex search over file content

pub mod config;
pub mod error;
pub mod index;
pub mod namespace;
pub mod query;
pub mod search;
pub mod shared;
pub mod storage;
pub mod types;

// Re-export main types
pub use config::NamespaceConfig;
pub use error::{NamespaceError, Result};
pub use index::{ChildEntry, TreeNode};
pub use namespace::Namespace;
pub use query::{render_outcome, GrepFlags, LineMatcher, SearchOptions};
pub use shared::SharedNamespace;
pub use storage::{FileId, FolderId, NodeId, NodeKind};
pub use types::{GrepOutcome, MatchRecord};
