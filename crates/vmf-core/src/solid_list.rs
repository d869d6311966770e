//! Append-only, insertion-ordered storage for a world's solids.
//!
//! Capacity is reserved in steps: INITIAL_SOLID_CAPACITY on the first
//! append, then half the current capacity each time the list fills up.

use std::ops::Index;

use crate::constants::{INITIAL_SOLID_CAPACITY, SOLID_GROWTH_DIVISOR};
use crate::solid::Solid;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolidList {
    solids: Vec<Solid>,
}

impl SolidList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a solid after every solid already present.
    pub fn push(&mut self, solid: Solid) {
        if self.solids.len() == self.solids.capacity() {
            let additional = match self.solids.capacity() {
                0 => INITIAL_SOLID_CAPACITY,
                capacity => (capacity / SOLID_GROWTH_DIVISOR).max(1),
            };
            self.solids.reserve_exact(additional);
        }
        self.solids.push(solid);
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.solids.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Solid> {
        self.solids.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solid> {
        self.solids.iter()
    }
}

impl Index<usize> for SolidList {
    type Output = Solid;

    fn index(&self, index: usize) -> &Solid {
        &self.solids[index]
    }
}

impl<'a> IntoIterator for &'a SolidList {
    type Item = &'a Solid;
    type IntoIter = std::slice::Iter<'a, Solid>;

    fn into_iter(self) -> Self::IntoIter {
        self.solids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Editor;
    use crate::id::IdAllocator;
    use crate::types::EntityId;

    #[test]
    fn test_empty_list_allocates_nothing() {
        let list = SolidList::new();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 0);
    }

    #[test]
    fn test_first_push_reserves_initial_capacity() {
        let ids = IdAllocator::new();
        let mut list = SolidList::new();
        list.push(Solid::new(&ids, Editor::default()));
        assert!(list.capacity() >= INITIAL_SOLID_CAPACITY);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_order_preserved_past_initial_capacity() {
        let ids = IdAllocator::new();
        let mut list = SolidList::new();
        let count = INITIAL_SOLID_CAPACITY * 2 + 17;
        for _ in 0..count {
            list.push(Solid::new(&ids, Editor::default()));
        }

        assert_eq!(list.len(), count);
        assert!(list.capacity() >= count);
        for (i, solid) in list.iter().enumerate() {
            assert_eq!(solid.id, EntityId(i as u32 + 1));
        }
        assert_eq!(list[count - 1].id, EntityId(count as u32));
        assert!(list.get(count).is_none());
    }

    #[test]
    fn test_growth_is_one_and_a_half_times() {
        let ids = IdAllocator::new();
        let mut list = SolidList::new();
        for _ in 0..=INITIAL_SOLID_CAPACITY {
            list.push(Solid::new(&ids, Editor::default()));
        }
        // reserve_exact may round up, never down.
        assert!(list.capacity() >= INITIAL_SOLID_CAPACITY + INITIAL_SOLID_CAPACITY / 2);
    }
}
