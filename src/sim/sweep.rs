//! Mark-and-sweep removal shared by the entity sets
//!
//! Entities are tombstoned while a pass iterates and compacted afterwards, so
//! no pass ever erases from the vector it is walking.

/// An entity that can be marked for removal
pub trait Tombstone {
    fn is_dead(&self) -> bool;
    fn kill(&mut self);
}

/// Drop every tombstoned entity, preserving the order of survivors.
/// Returns how many were removed.
pub fn compact<T: Tombstone>(items: &mut Vec<T>) -> usize {
    let before = items.len();
    items.retain(|item| !item.is_dead());
    before - items.len()
}
