//! Typed identifiers for namespace entities.
//!
//! Folders and files are minted from separate counters, so the same raw
//! number can name one of each. The kind travels in the type; the `F`/`f`
//! prefix exists only in the rendered form.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A compact 32-bit folder identifier; also the slot in the folder slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FolderId(u32);

/// A compact 32-bit file identifier; also the slot in the file slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FileId(u32);

macro_rules! slab_id {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            /// Creates an id from a slab slot.
            ///
            /// # Panics
            /// Panics if `index` does not fit in a `u32`.
            #[inline]
            pub fn new(index: usize) -> Self {
                assert!(
                    index <= u32::MAX as usize,
                    "slab index must fit in a u32"
                );
                Self(index as u32)
            }

            /// Returns the slab slot.
            #[inline]
            pub fn get(&self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.strip_prefix($prefix)
                    .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|digits| digits.parse().ok())
                    .map(Self)
                    .ok_or_else(|| format!("invalid node id: {s}"))
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(D::Error::custom)
            }
        }
    };
}

slab_id!(FolderId, "F");
slab_id!(FileId, "f");

/// Any entity in the namespace.
///
/// Every id serializes as its display form (`F3`, `f0`), so adapters see one
/// opaque string per entity whichever id type a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeId {
    Folder(FolderId),
    File(FileId),
}

impl NodeId {
    pub fn as_folder(self) -> Option<FolderId> {
        match self {
            Self::Folder(id) => Some(id),
            Self::File(_) => None,
        }
    }

    pub fn as_file(self) -> Option<FileId> {
        match self {
            Self::File(id) => Some(id),
            Self::Folder(_) => None,
        }
    }
}

impl From<FolderId> for NodeId {
    fn from(id: FolderId) -> Self {
        Self::Folder(id)
    }
}

impl From<FileId> for NodeId {
    fn from(id: FileId) -> Self {
        Self::File(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder(id) => id.fmt(f),
            Self::File(id) => id.fmt(f),
        }
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes().first() {
            Some(b'F') => s.parse().map(Self::Folder),
            Some(b'f') => s.parse().map(Self::File),
            _ => Err(format!("invalid node id: {s}")),
        }
    }
}

impl Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_slot_different_kinds_are_distinct() {
        let folder = NodeId::from(FolderId::new(3));
        let file = NodeId::from(FileId::new(3));
        assert_ne!(folder, file);
        assert_eq!(folder.as_folder(), Some(FolderId::new(3)));
        assert_eq!(folder.as_file(), None);
        assert_eq!(file.as_file(), Some(FileId::new(3)));
    }

    #[test]
    fn parses_display_form() {
        assert_eq!("F12".parse::<NodeId>(), Ok(NodeId::Folder(FolderId::new(12))));
        assert_eq!("f0".parse::<NodeId>(), Ok(NodeId::File(FileId::new(0))));
        assert!("x1".parse::<NodeId>().is_err());
        assert!("F".parse::<NodeId>().is_err());
        assert!("".parse::<NodeId>().is_err());
        assert!("F+1".parse::<NodeId>().is_err());
        assert!("f1".parse::<FolderId>().is_err());
        assert_eq!("f7".parse::<FileId>(), Ok(FileId::new(7)));
    }

    #[test]
    fn every_id_serializes_with_its_kind() {
        let file = FileId::new(0);
        assert_eq!(serde_json::to_value(file).unwrap(), serde_json::json!("f0"));
        assert_eq!(
            serde_json::to_value(FolderId::new(0)).unwrap(),
            serde_json::json!("F0")
        );
        assert_eq!(
            serde_json::to_value(NodeId::from(file)).unwrap(),
            serde_json::json!("f0")
        );

        let back: FileId = serde_json::from_str("\"f0\"").unwrap();
        assert_eq!(back, file);
        let back: NodeId = serde_json::from_str("\"F3\"").unwrap();
        assert_eq!(back, NodeId::Folder(FolderId::new(3)));
        assert!(serde_json::from_str::<FolderId>("0").is_err());
        assert!(serde_json::from_str::<FolderId>("\"f0\"").is_err());
    }

    #[test]
    fn display_carries_kind() {
        assert_eq!(FolderId::new(1).to_string(), "F1");
        assert_eq!(NodeId::File(FileId::new(0)).to_string(), "f0");
    }
}
