//! Append-only slab allocator.
//!
//! Entries live in a flat `Vec`; the slot index is the entity's id. Removing
//! an entry drops its payload and leaves a vacant slot behind. Slots are not
//! recycled, which keeps ids monotonic and guarantees that a removed id never
//! resolves to a newer entity.

use std::mem;

use super::entry::Entry;

#[derive(Debug, Clone)]
pub struct Slab<T> {
    entries: Vec<Entry<T>>,

    /// Logical element count (occupied slots only).
    len: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slab<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            len: 0,
        }
    }

    /// Inserts a value, returning its stable index.
    pub fn insert(&mut self, value: T) -> usize {
        let key = self.entries.len();
        self.entries.push(Entry::Occupied(value));
        self.len += 1;
        key
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match self.entries.get(index)? {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant => None,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.entries.get_mut(index)? {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant => None,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Removes the value at `index` if it exists, returning it.
    pub fn try_remove(&mut self, index: usize) -> Option<T> {
        let entry = self.entries.get_mut(index)?;
        match mem::replace(entry, Entry::Vacant) {
            Entry::Occupied(value) => {
                self.len = self.len.saturating_sub(1);
                Some(value)
            }
            Entry::Vacant => None,
        }
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
