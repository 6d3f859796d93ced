use armory_core::{DomainError, DomainResult};

/// Slot-count rule shared by every container kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SlotCapacity {
    limit: usize,
}

impl SlotCapacity {
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Fails when `count` items would not fit.
    pub fn ensure_fits(&self, count: usize) -> DomainResult<()> {
        if count > self.limit {
            return Err(DomainError::capacity_exceeded(count, self.limit));
        }
        Ok(())
    }

    /// Fails when a container already holding `occupied` items is full.
    pub fn ensure_room_for_one_more(&self, occupied: usize) -> DomainResult<()> {
        self.ensure_fits(occupied.saturating_add(1))
    }

    pub fn free_slots(&self, occupied: usize) -> usize {
        self.limit.saturating_sub(occupied)
    }
}
