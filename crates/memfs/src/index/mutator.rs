//! Create and remove operations on `NamespaceData`.

use crate::error::{NamespaceError, Result};
use crate::storage::{normalize_file_name, File, FileId, Folder, FolderId, NodeId};

use super::data::NamespaceData;

/// Everything a removal freed, in the order it was freed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemovalSummary {
    pub folders: Vec<FolderId>,
    pub files: Vec<FileId>,
}

impl RemovalSummary {
    pub fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}

impl NamespaceData {
    /// Registers a folder under `parent`. Fails without mutating anything if
    /// a sibling of either kind already uses `name`.
    pub fn create_folder_record(&mut self, name: &str, parent: FolderId) -> Result<FolderId> {
        validate_folder_name(name)?;
        self.ensure_name_free(name, parent)?;

        let id = self.registry.insert_folder(Folder::new(name, Some(parent)));
        self.tree.attach(parent, id.into());
        self.tree.add_folder(id);
        log::debug!("folder created id={id} name={name} parent={parent}");
        Ok(id)
    }

    /// Registers an empty file under `parent`, with the same collision rule
    /// as folders.
    ///
    /// The check runs on the display name, so `draft.` collides with a folder
    /// or file named `draft`.
    pub fn create_file_record(&mut self, name: &str, parent: FolderId) -> Result<FileId> {
        validate_entry_name(name)?;
        let display = normalize_file_name(name);
        if display.is_empty() {
            return Err(NamespaceError::InvalidName(name.to_string()));
        }
        self.ensure_name_free(&display, parent)?;

        let id = self.registry.insert_file(File::new(name, parent));
        self.tree.attach(parent, id.into());
        log::debug!("file created id={id} name={name} parent={parent}");
        Ok(id)
    }

    /// Detaches a file from its folder and frees its record.
    pub fn remove_file_record(&mut self, id: FileId) -> Result<File> {
        let parent = self.registry.file(id)?.parent();
        if !self.tree.detach(parent, id.into()) {
            log::error!("file missing from its parent's child set id={id} parent={parent}");
        }
        if self.prune_empty_child_sets {
            self.tree.prune_if_empty(parent);
        }
        let file = self
            .registry
            .remove_file(id)
            .ok_or_else(|| NamespaceError::missing_node(id))?;
        log::debug!("file removed id={id} name={}", file.name());
        Ok(file)
    }

    /// Detaches a folder from its parent and frees it together with every
    /// descendant.
    ///
    /// The walk is post-order over an explicit stack: a folder's index entry
    /// and record go only after everything below it is gone, so arbitrarily
    /// deep trees never touch the native call stack.
    pub fn remove_folder_tree(&mut self, id: FolderId) -> Result<RemovalSummary> {
        if id == self.root() {
            return Err(NamespaceError::FolderInUse(id));
        }
        let parent = self
            .registry
            .folder(id)?
            .parent()
            .ok_or_else(|| NamespaceError::InvariantViolation(format!("{id} has no parent")))?;

        if !self.tree.detach(parent, id.into()) {
            log::error!("folder missing from its parent's child set id={id} parent={parent}");
        }
        if self.prune_empty_child_sets {
            self.tree.prune_if_empty(parent);
        }

        let mut summary = RemovalSummary::default();
        let mut stack = vec![(id, false)];
        while let Some((folder, drained)) = stack.pop() {
            if drained {
                self.tree.remove_folder(folder);
                if let Some(record) = self.registry.remove_folder(folder) {
                    log::debug!("folder removed id={folder} name={}", record.name());
                    summary.folders.push(folder);
                }
                continue;
            }

            stack.push((folder, true));
            for child in self.tree.children(folder).to_vec() {
                match child {
                    NodeId::Folder(sub) => stack.push((sub, false)),
                    NodeId::File(file) => {
                        if let Some(record) = self.registry.remove_file(file) {
                            log::debug!("file removed id={file} name={}", record.name());
                            summary.files.push(file);
                        }
                    }
                }
            }
        }

        Ok(summary)
    }

    fn ensure_name_free(&self, name: &str, parent: FolderId) -> Result<()> {
        self.registry.folder(parent)?;
        if self.find_child(parent, name).is_some() {
            return Err(NamespaceError::NameCollision {
                parent,
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

fn validate_entry_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') || name.chars().any(char::is_control) {
        return Err(NamespaceError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Folder names also can't shadow the `.`/`..` navigation names.
fn validate_folder_name(name: &str) -> Result<()> {
    validate_entry_name(name)?;
    if name == "." || name == ".." {
        return Err(NamespaceError::InvalidName(name.to_string()));
    }
    Ok(())
}
