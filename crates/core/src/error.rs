//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic business failure raised at the point of
/// violation. Storage and transport failures belong to the callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (malformed identifier, negative amount,
    /// a status the container does not accept, inconsistent persisted data).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A container was asked to hold more items than it has slots for.
    #[error("not enough space in container: {attempted} items exceed the limit of {limit}")]
    CapacityExceeded { attempted: usize, limit: usize },

    /// The referenced item is not held by the target container.
    #[error("not found: {0}")]
    NotFound(String),

    /// An item status change that the status state machine does not allow.
    #[error("item {item_id} cannot go from {from} to {to}")]
    StateTransition {
        item_id: ItemId,
        from: &'static str,
        to: &'static str,
    },

    /// A money subtraction would have produced a negative balance.
    #[error("insufficient funds: {requested} requested, {available} available")]
    InsufficientFunds { available: u64, requested: u64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn capacity_exceeded(attempted: usize, limit: usize) -> Self {
        Self::CapacityExceeded { attempted, limit }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn state_transition(item_id: ItemId, from: &'static str, to: &'static str) -> Self {
        Self::StateTransition { item_id, from, to }
    }

    pub fn insufficient_funds(available: u64, requested: u64) -> Self {
        Self::InsufficientFunds {
            available,
            requested,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_state_transition(&self) -> bool {
        matches!(self, Self::StateTransition { .. })
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}
