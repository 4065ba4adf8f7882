//! Entry enum for slab slots.

/// Internal entry representation for slab slots.
#[derive(Debug, Clone)]
pub enum Entry<T> {
    /// Slot was freed. Slots are never reused, so a freed id stays dead.
    Vacant,
    /// Slot is occupied by a value.
    Occupied(T),
}
