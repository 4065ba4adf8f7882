//! Folder and file records held by the entity registry.

use serde::{Deserialize, Serialize};

use super::index_types::FolderId;

/// Entity kind, as exposed to listings and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

#[derive(Debug, Clone)]
pub struct Folder {
    name: String,
    /// `None` only for the namespace root.
    parent: Option<FolderId>,
}

impl Folder {
    pub fn new(name: impl Into<String>, parent: Option<FolderId>) -> Self {
        Self {
            name: name.into(),
            parent,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn parent(&self) -> Option<FolderId> {
        self.parent
    }

    /// Rewires the parent link, bypassing every consistency check.
    #[cfg(test)]
    pub(crate) fn set_parent_for_tests(&mut self, parent: Option<FolderId>) {
        self.parent = parent;
    }
}

#[derive(Debug, Clone)]
pub struct File {
    stem: String,
    extension: String,
    content: String,
    parent: FolderId,
}

impl File {
    /// Creates an empty file, splitting `name` at its first `.` into stem
    /// and extension.
    pub fn new(name: &str, parent: FolderId) -> Self {
        let (stem, extension) = split_file_name(name);
        Self {
            stem: stem.to_string(),
            extension: extension.to_string(),
            content: String::new(),
            parent,
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The name the file is addressed by: `stem.extension`, or the bare stem
    /// when there is no extension.
    pub fn name(&self) -> String {
        join_file_name(&self.stem, &self.extension)
    }

    /// Compares against a display name without allocating.
    pub fn has_name(&self, name: &str) -> bool {
        let (stem, extension) = split_file_name(name);
        stem == self.stem && extension == self.extension
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    #[inline]
    pub fn parent(&self) -> FolderId {
        self.parent
    }
}

/// Splits at the first `.`; a name without one has an empty extension.
pub fn split_file_name(name: &str) -> (&str, &str) {
    name.split_once('.').unwrap_or((name, ""))
}

/// The display name a file created as `name` ends up with, e.g. `draft.`
/// becomes `draft`.
pub fn normalize_file_name(name: &str) -> String {
    let (stem, extension) = split_file_name(name);
    join_file_name(stem, extension)
}

fn join_file_name(stem: &str, extension: &str) -> String {
    if extension.is_empty() {
        stem.to_string()
    } else {
        format!("{stem}.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_splits_at_first_dot() {
        let file = File::new("archive.tar.gz", FolderId::new(0));
        assert_eq!(file.stem(), "archive");
        assert_eq!(file.extension(), "tar.gz");
        assert_eq!(file.name(), "archive.tar.gz");
        assert!(file.has_name("archive.tar.gz"));
        assert!(!file.has_name("archive.tar"));
    }

    #[test]
    fn file_without_extension() {
        let file = File::new("Makefile", FolderId::new(0));
        assert_eq!(file.extension(), "");
        assert_eq!(file.name(), "Makefile");
        assert!(file.has_name("Makefile"));
    }

    #[test]
    fn content_defaults_to_empty() {
        let mut file = File::new("notes.txt", FolderId::new(2));
        assert_eq!(file.content(), "");
        file.set_content("hello");
        assert_eq!(file.content(), "hello");
        assert_eq!(file.parent(), FolderId::new(2));
    }

    #[test]
    fn trailing_dot_keeps_empty_extension() {
        let file = File::new("draft.", FolderId::new(0));
        assert_eq!(file.stem(), "draft");
        assert_eq!(file.extension(), "");
        assert_eq!(file.name(), "draft");
        assert_eq!(normalize_file_name("draft."), "draft");
        assert_eq!(normalize_file_name("a.b.c"), "a.b.c");
    }
}
