use crate::storage::{FolderId, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamespaceError {
    #[error("Name already exists in folder {parent}: {name}")]
    NameCollision { parent: FolderId, name: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Folder is on the current path: {0}")]
    FolderInUse(FolderId),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NamespaceError>;

impl NamespaceError {
    /// Builds a `NotFound` for an id that is no longer (or never was) registered.
    pub fn missing_node(id: impl Into<NodeId>) -> Self {
        Self::NotFound(id.into().to_string())
    }
}
