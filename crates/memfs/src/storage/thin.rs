//! ThinSlab - typed wrapper over `Slab<T>`.

use std::marker::PhantomData;

use super::index_types::{FileId, FolderId};
use super::slab::Slab;

/// Id types that address a slot in a `ThinSlab`.
pub trait SlabKey: Copy {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

impl SlabKey for FolderId {
    fn from_index(index: usize) -> Self {
        FolderId::new(index)
    }

    fn index(self) -> usize {
        self.get()
    }
}

impl SlabKey for FileId {
    fn from_index(index: usize) -> Self {
        FileId::new(index)
    }

    fn index(self) -> usize {
        self.get()
    }
}

/// A `Slab<T>` addressed by a typed key, so folder ids can't index the file
/// slab and vice versa.
#[derive(Debug, Clone)]
pub struct ThinSlab<K, T> {
    slab: Slab<T>,
    _key: PhantomData<K>,
}

impl<K: SlabKey, T> Default for ThinSlab<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SlabKey, T> ThinSlab<K, T> {
    pub fn new() -> Self {
        Self {
            slab: Slab::new(),
            _key: PhantomData,
        }
    }

    pub fn insert(&mut self, value: T) -> K {
        K::from_index(self.slab.insert(value))
    }

    pub fn get(&self, key: K) -> Option<&T> {
        self.slab.get(key.index())
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.slab.get_mut(key.index())
    }

    pub fn contains(&self, key: K) -> bool {
        self.slab.contains(key.index())
    }

    pub fn try_remove(&mut self, key: K) -> Option<T> {
        self.slab.try_remove(key.index())
    }

    pub fn len(&self) -> usize {
        self.slab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slab.is_empty()
    }
}
