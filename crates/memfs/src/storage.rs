//! Storage layer for the namespace.
//!
//! - Append-only slabs holding folder and file records
//! - Typed ids (`FolderId`, `FileId`, `NodeId`)
//! - The tree index mapping folders to their children

mod entry;
mod index_types;
mod node;
mod registry;
mod slab;
mod thin;
mod tree_index;

pub use index_types::{FileId, FolderId, NodeId};
pub use node::{normalize_file_name, split_file_name, File, Folder, NodeKind};
pub use registry::{Entity, EntityRegistry};
pub use slab::Slab;
pub use thin::{SlabKey, ThinSlab};
pub use tree_index::TreeIndex;
