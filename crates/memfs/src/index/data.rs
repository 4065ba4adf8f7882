//! Core namespace data: the entity registry plus the tree index.
//!
//! `NamespaceData` owns both structures and keeps them consistent. Every
//! child listed in the tree index under a folder has that folder as its
//! parent, and every entity other than the root hangs off exactly one
//! parent chain ending at the root.

use crate::config::NamespaceConfig;
use crate::error::{NamespaceError, Result};
use crate::storage::{
    Entity, EntityRegistry, File, FileId, Folder, FolderId, NodeId, NodeKind, TreeIndex,
};

/// One row of a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChildEntry {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
}

#[derive(Debug)]
pub struct NamespaceData {
    pub(crate) registry: EntityRegistry,
    pub(crate) tree: TreeIndex,
    root: FolderId,
    pub(crate) prune_empty_child_sets: bool,
}

impl NamespaceData {
    /// Creates the registry with its root folder.
    pub fn new(config: &NamespaceConfig) -> Self {
        let mut registry = EntityRegistry::new();
        let mut tree = TreeIndex::new();
        let root = registry.insert_folder(Folder::new(config.root_name.as_str(), None));
        tree.add_folder(root);
        Self {
            registry,
            tree,
            root,
            prune_empty_child_sets: config.prune_empty_child_sets,
        }
    }

    #[inline]
    pub fn root(&self) -> FolderId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Result<Entity<'_>> {
        self.registry.get(id)
    }

    pub fn folder(&self, id: FolderId) -> Result<&Folder> {
        self.registry.folder(id)
    }

    pub fn file(&self, id: FileId) -> Result<&File> {
        self.registry.file(id)
    }

    /// Children of a live folder, in creation order.
    pub fn children(&self, folder: FolderId) -> Result<&[NodeId]> {
        self.registry.folder(folder)?;
        Ok(self.tree.children(folder))
    }

    /// Finds a child of either kind by name.
    pub fn find_child(&self, parent: FolderId, name: &str) -> Option<NodeId> {
        self.tree.children(parent).iter().copied().find(|child| {
            self.registry
                .get(*child)
                .is_ok_and(|entity| entity.has_name(name))
        })
    }

    pub fn find_child_folder(&self, parent: FolderId, name: &str) -> Option<FolderId> {
        self.tree
            .children(parent)
            .iter()
            .filter_map(|child| child.as_folder())
            .find(|id| self.registry.folder(*id).is_ok_and(|f| f.name() == name))
    }

    pub fn find_child_file(&self, parent: FolderId, name: &str) -> Option<FileId> {
        self.tree
            .children(parent)
            .iter()
            .filter_map(|child| child.as_file())
            .find(|id| self.registry.file(*id).is_ok_and(|f| f.has_name(name)))
    }

    /// Child files of `folder`, in creation order.
    pub fn child_files(&self, folder: FolderId) -> impl Iterator<Item = FileId> + '_ {
        self.tree
            .children(folder)
            .iter()
            .filter_map(|child| child.as_file())
    }

    /// Child folders of `folder`, in creation order.
    pub fn child_folders(&self, folder: FolderId) -> impl Iterator<Item = FolderId> + '_ {
        self.tree
            .children(folder)
            .iter()
            .filter_map(|child| child.as_folder())
    }

    pub fn list_children(&self, folder: FolderId) -> Result<Vec<ChildEntry>> {
        self.children(folder)?
            .iter()
            .map(|id| {
                let entity = self.registry.get(*id)?;
                Ok(ChildEntry {
                    id: *id,
                    name: entity.name(),
                    kind: entity.kind(),
                })
            })
            .collect()
    }

    pub fn set_file_content(&mut self, id: FileId, content: impl Into<String>) -> Result<()> {
        self.registry.file_mut(id)?.set_content(content);
        Ok(())
    }

    pub fn folder_count(&self) -> usize {
        self.registry.folder_count()
    }

    pub fn file_count(&self) -> usize {
        self.registry.file_count()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.registry.contains(id)
    }

    /// Upper bound on parent links between any entity and the root.
    pub(crate) fn parent_walk_limit(&self) -> usize {
        self.registry.folder_count() + 1
    }

    pub(crate) fn cycle_detected(&self, start: NodeId) -> NamespaceError {
        log::error!("parent chain does not terminate start={start}");
        NamespaceError::InvariantViolation(format!("cyclic parent chain from {start}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> NamespaceData {
        NamespaceData::new(&NamespaceConfig::default())
    }

    #[test]
    fn new_data_has_only_root() {
        let data = data();
        assert_eq!(data.folder_count(), 1);
        assert_eq!(data.file_count(), 0);
        assert!(data.children(data.root()).unwrap().is_empty());
        assert_eq!(data.folder(data.root()).unwrap().parent(), None);
    }

    #[test]
    fn find_child_matches_either_kind() {
        let mut data = data();
        let root = data.root();
        let docs = data.create_folder_record("docs", root).unwrap();
        let notes = data.create_file_record("notes.txt", root).unwrap();

        assert_eq!(data.find_child(root, "docs"), Some(docs.into()));
        assert_eq!(data.find_child(root, "notes.txt"), Some(notes.into()));
        assert_eq!(data.find_child_folder(root, "notes.txt"), None);
        assert_eq!(data.find_child_file(root, "docs"), None);
        assert_eq!(data.find_child(root, "missing"), None);
    }

    #[test]
    fn list_children_reports_kind_and_name() {
        let mut data = data();
        let root = data.root();
        let docs = data.create_folder_record("docs", root).unwrap();
        let readme = data.create_file_record("README", root).unwrap();

        let listing = data.list_children(root).unwrap();
        assert_eq!(
            listing,
            vec![
                ChildEntry {
                    id: docs.into(),
                    name: "docs".to_string(),
                    kind: NodeKind::Folder,
                },
                ChildEntry {
                    id: readme.into(),
                    name: "README".to_string(),
                    kind: NodeKind::File,
                },
            ]
        );
    }

    #[test]
    fn set_content_on_removed_file_is_not_found() {
        let mut data = data();
        let root = data.root();
        let file = data.create_file_record("a.txt", root).unwrap();
        data.remove_file_record(file).unwrap();
        assert!(matches!(
            data.set_file_content(file, "x"),
            Err(NamespaceError::NotFound(_))
        ));
    }
}
