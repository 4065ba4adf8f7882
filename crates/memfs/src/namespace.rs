//! Namespace - main API for the in-memory folder tree.
//!
//! Owns the store and the cursor. Name-based operations act on the current
//! folder; id-based ones address any live entity.

use crate::config::NamespaceConfig;
use crate::error::{NamespaceError, Result};
use crate::index::{build_snapshot, ChildEntry, Cursor, NamespaceData, NodeView, TreeNode};
use crate::query::SearchOptions;
use crate::search::search_index_data;
use crate::storage::{FileId, FolderId, NodeId};
use crate::types::GrepOutcome;

#[derive(Debug)]
pub struct Namespace {
    data: NamespaceData,
    cursor: Cursor,
    config: NamespaceConfig,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// An empty namespace with the cursor at the root.
    pub fn new() -> Self {
        let config = NamespaceConfig::default();
        let data = NamespaceData::new(&config);
        let cursor = Cursor::new(data.root());
        Self {
            data,
            cursor,
            config,
        }
    }

    /// Builds a namespace from `config`. When `home_folder` is set, that
    /// folder is created under the root and the cursor starts inside it.
    pub fn with_config(config: NamespaceConfig) -> Result<Self> {
        let data = NamespaceData::new(&config);
        let mut namespace = Self {
            cursor: Cursor::new(data.root()),
            data,
            config,
        };

        if let Some(home) = namespace.config.home_folder.clone() {
            let root = namespace.data.root();
            namespace.data.create_folder_record(&home, root)?;
            namespace.cursor.descend(&namespace.data, &home)?;
        }

        log::info!(
            "namespace init root_name={} home_folder={:?} prune_empty_child_sets={}",
            namespace.config.root_name,
            namespace.config.home_folder,
            namespace.config.prune_empty_child_sets,
        );
        Ok(namespace)
    }

    /// Read access to the underlying store.
    pub fn data(&self) -> &NamespaceData {
        &self.data
    }

    pub fn root_id(&self) -> FolderId {
        self.data.root()
    }

    pub fn create_folder(&mut self, parent: FolderId, name: &str) -> Result<FolderId> {
        self.data.create_folder_record(name, parent)
    }

    pub fn create_file(&mut self, parent: FolderId, name: &str) -> Result<FileId> {
        self.data.create_file_record(name, parent)
    }

    /// Removes the child folder `name` of the current folder and everything
    /// below it.
    pub fn remove_folder(&mut self, name: &str) -> Result<()> {
        let id = self
            .data
            .find_child_folder(self.cursor.current(), name)
            .ok_or_else(|| NamespaceError::NotFound(name.to_string()))?;
        self.remove_node(id.into())
    }

    /// Removes the file `name` from the current folder.
    pub fn remove_file(&mut self, name: &str) -> Result<()> {
        let id = self.current_file(name)?;
        self.remove_node(id.into())
    }

    /// Removes any entity by id. Folders on the cursor's path (the root
    /// included) are refused with `FolderInUse`.
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        match id {
            NodeId::File(file) => {
                self.data.remove_file_record(file)?;
            }
            NodeId::Folder(folder) => {
                self.data.folder(folder)?;
                if self.cursor.contains(folder) {
                    log::warn!(
                        "refusing to remove folder on the current path id={folder} current={}",
                        self.cursor.current()
                    );
                    return Err(NamespaceError::FolderInUse(folder));
                }
                let summary = self.data.remove_folder_tree(folder)?;
                log::debug!(
                    "folder tree removed id={folder} folders={} files={}",
                    summary.folders.len(),
                    summary.files.len()
                );
            }
        }
        Ok(())
    }

    /// Replaces the content of the file `file_name` in the current folder.
    pub fn set_content(&mut self, file_name: &str, content: &str) -> Result<()> {
        let id = self.current_file(file_name)?;
        self.data.set_file_content(id, content)
    }

    /// Content of the file `name` in the current folder.
    pub fn file_content(&self, name: &str) -> Result<&str> {
        let id = self.current_file(name)?;
        Ok(self.data.file(id)?.content())
    }

    pub fn file_path(&self, id: FileId) -> Result<String> {
        NodeView::new(&self.data, id).compute_path()
    }

    pub fn folder_path(&self, id: FolderId) -> Result<String> {
        NodeView::new(&self.data, id).compute_path()
    }

    pub fn descend(&mut self, name: &str) -> Result<FolderId> {
        self.cursor.descend(&self.data, name)
    }

    /// Moves to the parent folder; false (and no move) at the root.
    pub fn ascend(&mut self) -> bool {
        self.cursor.ascend()
    }

    pub fn current_folder_id(&self) -> FolderId {
        self.cursor.current()
    }

    pub fn current_path(&self) -> Result<String> {
        self.folder_path(self.cursor.current())
    }

    /// Whether the current folder has a child folder named `name`.
    pub fn has_child_folder(&self, name: &str) -> bool {
        self.data
            .find_child_folder(self.cursor.current(), name)
            .is_some()
    }

    pub fn list_children(&self, folder: FolderId) -> Result<Vec<ChildEntry>> {
        self.data.list_children(folder)
    }

    pub fn snapshot(&self, folder: FolderId) -> Result<TreeNode> {
        build_snapshot(&self.data, folder)
    }

    /// Searches the current folder (or the target named in `options`).
    pub fn grep(&self, pattern: &str, options: &SearchOptions) -> Result<GrepOutcome> {
        search_index_data(&self.data, self.cursor.current(), pattern, options)
    }

    pub fn folder_count(&self) -> usize {
        self.data.folder_count()
    }

    pub fn file_count(&self) -> usize {
        self.data.file_count()
    }

    fn current_file(&self, name: &str) -> Result<FileId> {
        self.data
            .find_child_file(self.cursor.current(), name)
            .ok_or_else(|| NamespaceError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NodeKind;

    #[test]
    fn new_namespace_starts_at_root() {
        let ns = Namespace::new();
        assert_eq!(ns.current_folder_id(), ns.root_id());
        assert_eq!(ns.current_path().unwrap(), "/");
        assert_eq!(ns.folder_count(), 1);
        assert_eq!(ns.file_count(), 0);
    }

    #[test]
    fn home_folder_is_created_and_entered() {
        let config = NamespaceConfig {
            home_folder: Some("BaseFolder".to_string()),
            ..NamespaceConfig::default()
        };
        let ns = Namespace::with_config(config).unwrap();
        assert_eq!(ns.current_path().unwrap(), "/BaseFolder");
        assert_ne!(ns.current_folder_id(), ns.root_id());
    }

    #[test]
    fn invalid_home_folder_is_rejected() {
        let config = NamespaceConfig {
            home_folder: Some("a/b".to_string()),
            ..NamespaceConfig::default()
        };
        assert!(matches!(
            Namespace::with_config(config),
            Err(NamespaceError::InvalidName(_))
        ));
    }

    #[test]
    fn name_operations_act_on_current_folder() {
        let mut ns = Namespace::new();
        let docs = ns.create_folder(ns.root_id(), "docs").unwrap();
        ns.create_file(docs, "notes.txt").unwrap();

        assert!(matches!(
            ns.set_content("notes.txt", "x"),
            Err(NamespaceError::NotFound(_))
        ));
        assert!(ns.has_child_folder("docs"));

        ns.descend("docs").unwrap();
        ns.set_content("notes.txt", "Hello").unwrap();
        assert_eq!(ns.file_content("notes.txt").unwrap(), "Hello");
        assert!(!ns.has_child_folder("docs"));

        ns.remove_file("notes.txt").unwrap();
        assert_eq!(ns.file_count(), 0);
        assert!(ns.list_children(docs).unwrap().is_empty());
    }

    #[test]
    fn remove_folder_by_name_cascades() {
        let mut ns = Namespace::new();
        let root = ns.root_id();
        let a = ns.create_folder(root, "A").unwrap();
        ns.create_file(a, "b.txt").unwrap();
        let c = ns.create_folder(a, "C").unwrap();
        ns.create_file(c, "d.txt").unwrap();

        ns.remove_folder("A").unwrap();
        assert_eq!(ns.folder_count(), 1);
        assert_eq!(ns.file_count(), 0);
        assert!(ns.list_children(root).unwrap().is_empty());
        assert!(matches!(
            ns.remove_folder("A"),
            Err(NamespaceError::NotFound(_))
        ));
    }

    #[test]
    fn folders_on_cursor_path_cannot_be_removed() {
        let mut ns = Namespace::new();
        let root = ns.root_id();
        let a = ns.create_folder(root, "a").unwrap();
        let b = ns.create_folder(a, "b").unwrap();
        ns.descend("a").unwrap();
        ns.descend("b").unwrap();

        for id in [root, a, b] {
            assert_eq!(
                ns.remove_node(id.into()),
                Err(NamespaceError::FolderInUse(id))
            );
        }
        assert_eq!(ns.folder_count(), 3);

        ns.ascend();
        ns.remove_node(b.into()).unwrap();
        assert_eq!(ns.current_path().unwrap(), "/a");
    }

    #[test]
    fn remove_node_of_dead_id_is_not_found() {
        let mut ns = Namespace::new();
        let file = ns.create_file(ns.root_id(), "x").unwrap();
        ns.remove_node(file.into()).unwrap();
        assert!(matches!(
            ns.remove_node(file.into()),
            Err(NamespaceError::NotFound(_))
        ));
    }

    #[test]
    fn listing_reports_kinds() {
        let mut ns = Namespace::new();
        let root = ns.root_id();
        let docs = ns.create_folder(root, "docs").unwrap();
        let readme = ns.create_file(root, "readme.md").unwrap();

        let listing = ns.list_children(root).unwrap();
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
                    name: "readme.md".to_string(),
                    kind: NodeKind::File,
                },
            ]
        );
        assert_eq!(ns.file_path(readme).unwrap(), "/readme.md");
    }

    #[test]
    fn grep_searches_current_folder() {
        let mut ns = Namespace::new();
        let docs = ns.create_folder(ns.root_id(), "docs").unwrap();
        ns.create_file(docs, "notes.txt").unwrap();
        ns.descend("docs").unwrap();
        ns.set_content("notes.txt", "Hello World\nSecond line\n").unwrap();

        let outcome = ns.grep("World", &SearchOptions::default()).unwrap();
        let records = outcome.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_path, "/docs/notes.txt");

        ns.ascend();
        let outcome = ns.grep("World", &SearchOptions::default()).unwrap();
        assert_eq!(outcome.match_count(), 0);
    }
}
