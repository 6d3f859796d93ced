//! Aggregate root trait for domain models loaded and persisted as a unit.

/// Aggregate root marker + minimal interface.
///
/// An aggregate guards its own invariants; anything spanning two aggregates
/// is expressed as a free function taking both, never as a method on one.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
