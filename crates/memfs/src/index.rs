//! The namespace store.
//!
//! ## Module Structure
//!
//! - `data` - Registry + tree index, kept consistent together
//! - `mutator` - Create/remove operations, including cascading folder removal
//! - `cursor` - The current-directory stack
//! - `node_view` - Paths computed from parent links
//! - `snapshot` - Nested subtree snapshots for display

mod cursor;
mod data;
mod mutator;
mod node_view;
mod snapshot;

pub use cursor::Cursor;
pub use data::{ChildEntry, NamespaceData};
pub use mutator::RemovalSummary;
pub use node_view::NodeView;
pub use snapshot::{build_snapshot, TreeNode};
