//! Tree index: the authoritative folder -> children adjacency.

use fnv::FnvHashMap;
use thin_vec::ThinVec;

use super::index_types::{FolderId, NodeId};

/// Maps each folder to its children in creation order.
///
/// A folder with no entry has no children; entries for empty folders may be
/// pruned without changing what the index reports.
#[derive(Debug, Default)]
pub struct TreeIndex {
    children: FnvHashMap<FolderId, ThinVec<NodeId>>,
}

impl TreeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty child set for a new folder.
    pub fn add_folder(&mut self, folder: FolderId) {
        self.children.entry(folder).or_default();
    }

    pub fn has_entry(&self, folder: FolderId) -> bool {
        self.children.contains_key(&folder)
    }

    pub fn children(&self, folder: FolderId) -> &[NodeId] {
        self.children
            .get(&folder)
            .map(|children| children.as_slice())
            .unwrap_or(&[])
    }

    pub fn attach(&mut self, parent: FolderId, child: NodeId) {
        self.children.entry(parent).or_default().push(child);
    }

    /// Removes `child` from `parent`'s set. Returns false if it wasn't there.
    pub fn detach(&mut self, parent: FolderId, child: NodeId) -> bool {
        let Some(children) = self.children.get_mut(&parent) else {
            return false;
        };
        let Some(position) = children.iter().position(|id| *id == child) else {
            return false;
        };
        children.remove(position);
        true
    }

    /// Drops `folder`'s entry, returning the children it held.
    pub fn remove_folder(&mut self, folder: FolderId) -> ThinVec<NodeId> {
        self.children.remove(&folder).unwrap_or_default()
    }

    /// Drops `folder`'s entry if its child set is empty.
    pub fn prune_if_empty(&mut self, folder: FolderId) -> bool {
        if self.children.get(&folder).is_some_and(|c| c.is_empty()) {
            self.children.remove(&folder);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileId;

    #[test]
    fn attach_keeps_creation_order() {
        let mut index = TreeIndex::new();
        let root = FolderId::new(0);
        index.add_folder(root);
        index.attach(root, FileId::new(1).into());
        index.attach(root, FolderId::new(1).into());
        index.attach(root, FileId::new(0).into());
        assert_eq!(
            index.children(root),
            &[
                NodeId::File(FileId::new(1)),
                NodeId::Folder(FolderId::new(1)),
                NodeId::File(FileId::new(0)),
            ]
        );
    }

    #[test]
    fn detach_missing_child_is_false() {
        let mut index = TreeIndex::new();
        let root = FolderId::new(0);
        assert!(!index.detach(root, FileId::new(0).into()));
        index.add_folder(root);
        assert!(!index.detach(root, FileId::new(0).into()));
    }

    #[test]
    fn prune_only_removes_empty_entries() {
        let mut index = TreeIndex::new();
        let root = FolderId::new(0);
        index.attach(root, FileId::new(0).into());
        assert!(!index.prune_if_empty(root));
        assert!(index.detach(root, FileId::new(0).into()));
        assert!(index.prune_if_empty(root));
        assert!(!index.has_entry(root));
        assert!(index.children(root).is_empty());
    }

    #[test]
    fn remove_folder_returns_children() {
        let mut index = TreeIndex::new();
        let root = FolderId::new(0);
        index.attach(root, FileId::new(4).into());
        let removed = index.remove_folder(root);
        assert_eq!(removed.as_slice(), &[NodeId::File(FileId::new(4))]);
        assert!(!index.has_entry(root));
    }
}
