//! Path resolution for namespace entities.
//!
//! Paths are not stored; they are computed by walking parent links up to the
//! root. The root's own name is never rendered, so the root is `/` and its
//! children are `/name`.

use crate::error::Result;
use crate::storage::{Entity, NodeId};

use super::data::NamespaceData;

/// A view onto one entity that can compute derived properties.
pub struct NodeView<'a> {
    data: &'a NamespaceData,
    id: NodeId,
}

impl<'a> NodeView<'a> {
    #[inline]
    pub fn new(data: &'a NamespaceData, id: impl Into<NodeId>) -> Self {
        Self {
            data,
            id: id.into(),
        }
    }

    /// Builds the absolute `/`-joined path of the entity.
    ///
    /// Fails with `NotFound` for a dead id, and with `InvariantViolation` if
    /// the parent chain is longer than the number of live folders (a cycle).
    pub fn compute_path(&self) -> Result<String> {
        let mut segments = Vec::new();
        let mut parent = match self.data.get(self.id)? {
            Entity::Folder(folder) => {
                if folder.parent().is_some() {
                    segments.push(folder.name().to_string());
                }
                folder.parent()
            }
            Entity::File(file) => {
                segments.push(file.name());
                Some(file.parent())
            }
        };

        let limit = self.data.parent_walk_limit();
        while let Some(id) = parent {
            if segments.len() > limit {
                return Err(self.data.cycle_detected(self.id));
            }
            let folder = self.data.folder(id)?;
            match folder.parent() {
                Some(next) => {
                    segments.push(folder.name().to_string());
                    parent = Some(next);
                }
                None => break,
            }
        }

        if segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in segments.iter().rev() {
            path.push('/');
            path.push_str(segment);
        }
        Ok(path)
    }
}
