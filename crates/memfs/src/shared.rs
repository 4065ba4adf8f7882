//! Thread-shareable namespace handle.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::NamespaceConfig;
use crate::error::Result;
use crate::index::{ChildEntry, TreeNode};
use crate::namespace::Namespace;
use crate::query::SearchOptions;
use crate::storage::{FileId, FolderId, NodeId};
use crate::types::GrepOutcome;

/// A `Namespace` behind a read/write lock.
///
/// Searches and other read-only queries share the read lock; mutations and
/// cursor moves take the write lock. The cursor is part of the shared state,
/// so every clone of the handle sees the same current folder.
#[derive(Debug, Clone, Default)]
pub struct SharedNamespace {
    inner: Arc<RwLock<Namespace>>,
}

impl SharedNamespace {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(namespace)),
        }
    }

    pub fn with_config(config: NamespaceConfig) -> Result<Self> {
        Ok(Self::new(Namespace::with_config(config)?))
    }

    /// Holds the read lock for a sequence of queries.
    pub fn read(&self) -> RwLockReadGuard<'_, Namespace> {
        self.inner.read()
    }

    /// Holds the write lock for a sequence of mutations.
    pub fn write(&self) -> RwLockWriteGuard<'_, Namespace> {
        self.inner.write()
    }

    pub fn create_folder(&self, parent: FolderId, name: &str) -> Result<FolderId> {
        self.inner.write().create_folder(parent, name)
    }

    pub fn create_file(&self, parent: FolderId, name: &str) -> Result<FileId> {
        self.inner.write().create_file(parent, name)
    }

    pub fn remove_folder(&self, name: &str) -> Result<()> {
        self.inner.write().remove_folder(name)
    }

    pub fn remove_file(&self, name: &str) -> Result<()> {
        self.inner.write().remove_file(name)
    }

    pub fn remove_node(&self, id: NodeId) -> Result<()> {
        self.inner.write().remove_node(id)
    }

    pub fn set_content(&self, file_name: &str, content: &str) -> Result<()> {
        self.inner.write().set_content(file_name, content)
    }

    pub fn descend(&self, name: &str) -> Result<FolderId> {
        self.inner.write().descend(name)
    }

    pub fn ascend(&self) -> bool {
        self.inner.write().ascend()
    }

    pub fn file_content(&self, name: &str) -> Result<String> {
        self.inner.read().file_content(name).map(str::to_string)
    }

    pub fn current_folder_id(&self) -> FolderId {
        self.inner.read().current_folder_id()
    }

    pub fn current_path(&self) -> Result<String> {
        self.inner.read().current_path()
    }

    pub fn list_children(&self, folder: FolderId) -> Result<Vec<ChildEntry>> {
        self.inner.read().list_children(folder)
    }

    pub fn snapshot(&self, folder: FolderId) -> Result<TreeNode> {
        self.inner.read().snapshot(folder)
    }

    pub fn grep(&self, pattern: &str, options: &SearchOptions) -> Result<GrepOutcome> {
        self.inner.read().grep(pattern, options)
    }
}
