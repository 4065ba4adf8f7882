//! The current-directory cursor.

use crate::error::{NamespaceError, Result};
use crate::storage::FolderId;

use super::data::NamespaceData;

/// Stack of folder ids from the root to the active folder.
///
/// Never empty: the bottom entry is the root and `ascend` refuses to pop it.
#[derive(Debug, Clone)]
pub struct Cursor {
    stack: Vec<FolderId>,
}

impl Cursor {
    pub fn new(root: FolderId) -> Self {
        Self { stack: vec![root] }
    }

    #[inline]
    pub fn current(&self) -> FolderId {
        // The stack always holds at least the root.
        self.stack[self.stack.len() - 1]
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.len() == 1
    }

    pub fn contains(&self, folder: FolderId) -> bool {
        self.stack.contains(&folder)
    }

    /// Moves into the child folder `name` of the current folder. Files with
    /// that name don't count.
    pub fn descend(&mut self, data: &NamespaceData, name: &str) -> Result<FolderId> {
        let current = self.current();
        let next = data
            .find_child_folder(current, name)
            .ok_or_else(|| NamespaceError::NotFound(name.to_string()))?;
        self.stack.push(next);
        Ok(next)
    }

    /// Moves to the parent folder. Returns false, without moving, at the root.
    pub fn ascend(&mut self) -> bool {
        if self.is_at_root() {
            return false;
        }
        self.stack.pop();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamespaceConfig;

    #[test]
    fn descend_then_ascend_round_trips() {
        let mut data = NamespaceData::new(&NamespaceConfig::default());
        let root = data.root();
        let docs = data.create_folder_record("docs", root).unwrap();
        let mut cursor = Cursor::new(root);

        assert_eq!(cursor.descend(&data, "docs").unwrap(), docs);
        assert_eq!(cursor.current(), docs);
        assert!(cursor.contains(root) && cursor.contains(docs));
        assert!(cursor.ascend());
        assert_eq!(cursor.current(), root);
    }

    #[test]
    fn descend_ignores_files_and_missing_names() {
        let mut data = NamespaceData::new(&NamespaceConfig::default());
        let root = data.root();
        data.create_file_record("notes", root).unwrap();
        let mut cursor = Cursor::new(root);

        assert!(matches!(
            cursor.descend(&data, "notes"),
            Err(NamespaceError::NotFound(_))
        ));
        assert!(cursor.descend(&data, "nope").is_err());
        assert!(cursor.is_at_root());
    }

    #[test]
    fn ascend_clamps_at_root() {
        let root = FolderId::new(0);
        let mut cursor = Cursor::new(root);
        for _ in 0..3 {
            assert!(!cursor.ascend());
            assert!(cursor.is_at_root());
            assert_eq!(cursor.current(), root);
        }
    }
}
