//! Entity registry: owns every folder and file record, keyed by id.

use super::index_types::{FileId, FolderId, NodeId};
use super::node::{File, Folder, NodeKind};
use super::thin::ThinSlab;
use crate::error::{NamespaceError, Result};

/// A borrowed view of any registered entity.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Folder(&'a Folder),
    File(&'a File),
}

impl Entity<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Folder(_) => NodeKind::Folder,
            Self::File(_) => NodeKind::File,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Folder(folder) => folder.name().to_string(),
            Self::File(file) => file.name(),
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        match self {
            Self::Folder(folder) => folder.name() == name,
            Self::File(file) => file.has_name(name),
        }
    }
}

#[derive(Debug, Default)]
pub struct EntityRegistry {
    folders: ThinSlab<FolderId, Folder>,
    files: ThinSlab<FileId, File>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_folder(&mut self, folder: Folder) -> FolderId {
        self.folders.insert(folder)
    }

    pub fn insert_file(&mut self, file: File) -> FileId {
        self.files.insert(file)
    }

    pub fn folder(&self, id: FolderId) -> Result<&Folder> {
        self.folders
            .get(id)
            .ok_or_else(|| NamespaceError::missing_node(id))
    }

    pub fn file(&self, id: FileId) -> Result<&File> {
        self.files
            .get(id)
            .ok_or_else(|| NamespaceError::missing_node(id))
    }

    #[cfg(test)]
    pub(crate) fn folder_mut_for_tests(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.folders.get_mut(id)
    }

    pub fn file_mut(&mut self, id: FileId) -> Result<&mut File> {
        self.files
            .get_mut(id)
            .ok_or_else(|| NamespaceError::missing_node(id))
    }

    pub fn get(&self, id: NodeId) -> Result<Entity<'_>> {
        match id {
            NodeId::Folder(id) => self.folder(id).map(Entity::Folder),
            NodeId::File(id) => self.file(id).map(Entity::File),
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        match id {
            NodeId::Folder(id) => self.folders.contains(id),
            NodeId::File(id) => self.files.contains(id),
        }
    }

    pub fn remove_folder(&mut self, id: FolderId) -> Option<Folder> {
        self.folders.try_remove(id)
    }

    pub fn remove_file(&mut self, id: FileId) -> Option<File> {
        self.files.try_remove(id)
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
