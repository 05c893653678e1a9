//! Repository Layer - Core Traits
//!
//! Lists and todos are both ordered sequences addressed by position.
//! This trait gives them one shared read interface plus the translation
//! from surrogate id back to the current position.

use crate::domain::{DomainError, DomainResult, Entity, Missing};

/// Read access to an ordered, position-addressed collection
pub trait PositionalRepository<T: Entity> {
    /// All entries in order
    fn entries(&self) -> &[T];

    /// Wrap an out-of-range position in the matching error
    fn missing(position: usize) -> Missing;

    fn count(&self) -> usize {
        self.entries().len()
    }

    fn find_at(&self, position: usize) -> Option<&T> {
        self.entries().get(position)
    }

    /// Current position of the entry with this id, if it still exists
    fn position_of(&self, id: T::Id) -> Option<usize> {
        self.entries().iter().position(|entry| entry.id() == id)
    }

    /// Fail with `NotFound` unless `position` addresses an entry
    fn ensure_position(&self, position: usize) -> DomainResult<()> {
        if position < self.count() {
            Ok(())
        } else {
            log::warn!("stale position {position} (len {})", self.count());
            Err(DomainError::NotFound(Self::missing(position)))
        }
    }
}
