//! Identifier allocation shared by every world, solid and side.
//!
//! One allocator is created per map-building session and passed by shared
//! reference to each constructor. Ids start at 1 and increase by one per
//! construction; they are never reused.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::constants::FIRST_ENTITY_ID;
use crate::error::CoreError;
use crate::types::EntityId;

/// Monotonic id counter. Atomic so `&IdAllocator` can be shared.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Allocator whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(FIRST_ENTITY_ID)
    }

    /// Allocator whose first id is `first`. Used to seed deterministic output.
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }

    /// Issue the next id.
    ///
    /// # Panics
    /// When the u32 id space is exhausted. That takes four billion
    /// constructions; use `try_next_id` to observe it instead.
    pub fn next_id(&self) -> EntityId {
        match self.try_next_id() {
            Ok(id) => id,
            Err(e) => panic!("{e}"),
        }
    }

    /// Issue the next id, or report exhaustion without consuming anything.
    pub fn try_next_id(&self) -> Result<EntityId, CoreError> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map(EntityId)
            .map_err(|last| CoreError::IdsExhausted(last.wrapping_sub(1)))
    }

    /// The id the next call to `next_id` would return.
    pub fn peek(&self) -> EntityId {
        EntityId(self.next.load(Ordering::Relaxed))
    }

    /// Restart numbering at 1.
    pub fn reset(&self) {
        self.reset_to(FIRST_ENTITY_ID);
    }

    pub fn reset_to(&self, first: u32) {
        self.next.store(first, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_is_one() {
        let ids = IdAllocator::new();
        assert_eq!(ids.next_id(), EntityId(1));
        assert_eq!(ids.next_id(), EntityId(2));
    }

    #[test]
    fn test_ids_are_consecutive_in_call_order() {
        let ids = IdAllocator::starting_at(10);
        let issued: Vec<u32> = (0..100).map(|_| ids.next_id().get()).collect();
        let expected: Vec<u32> = (10..110).collect();
        assert_eq!(issued, expected);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let ids = IdAllocator::new();
        assert_eq!(ids.peek(), EntityId(1));
        assert_eq!(ids.peek(), EntityId(1));
        assert_eq!(ids.next_id(), EntityId(1));
        assert_eq!(ids.peek(), EntityId(2));
    }

    #[test]
    fn test_reset_restarts_numbering() {
        let ids = IdAllocator::new();
        ids.next_id();
        ids.next_id();
        ids.reset();
        assert_eq!(ids.next_id(), EntityId(1));
        ids.reset_to(500);
        assert_eq!(ids.next_id(), EntityId(500));
    }

    #[test]
    fn test_exhaustion_is_reported() {
        let ids = IdAllocator::starting_at(u32::MAX - 1);
        assert_eq!(ids.try_next_id(), Ok(EntityId(u32::MAX - 1)));
        assert_eq!(
            ids.try_next_id(),
            Err(CoreError::IdsExhausted(u32::MAX - 1))
        );
        // Exhaustion does not move the counter.
        assert_eq!(ids.peek(), EntityId(u32::MAX));
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_next_id_panics_when_exhausted() {
        let ids = IdAllocator::starting_at(u32::MAX);
        ids.next_id();
    }
}
