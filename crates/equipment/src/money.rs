use serde::{Deserialize, Serialize};

use armory_core::{DomainError, DomainResult, ValueObject};

/// A non-negative amount of in-game currency.
///
/// There is no subdivision below the integer unit. Arithmetic never mutates
/// an operand; it returns a new `Money` or a typed failure.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Validated constructor for amounts coming from untyped sources.
    pub fn new(amount: i64) -> DomainResult<Self> {
        u64::try_from(amount)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("money cannot be negative (got {amount})")))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether this balance can pay for `other` without going negative.
    pub fn covers(&self, other: Money) -> bool {
        self.0 >= other.0
    }

    pub fn add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::validation("money amount overflow"))
    }

    pub fn subtract(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::insufficient_funds(self.0, other.0))
    }
}

impl ValueObject for Money {}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
