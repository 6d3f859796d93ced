use core::str::FromStr;

use serde::{Deserialize, Serialize};

use armory_core::{DomainError, ValueObject};

/// Where an item is held and whether it is in use.
///
/// Legal transitions:
///
/// ```text
/// InStore <-> InBackpack <-> Equipped
/// ```
///
/// An item in a store has to go back to a backpack before it can be equipped,
/// and an equipped item has to be taken off before it can be put up for sale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    InBackpack,
    InStore,
    Equipped,
}

impl ItemStatus {
    pub const fn in_backpack() -> Self {
        Self::InBackpack
    }

    pub const fn in_store() -> Self {
        Self::InStore
    }

    pub const fn equipped() -> Self {
        Self::Equipped
    }

    pub fn is_in_backpack(self) -> bool {
        self == Self::InBackpack
    }

    pub fn is_in_store(self) -> bool {
        self == Self::InStore
    }

    pub fn is_equipped(self) -> bool {
        self == Self::Equipped
    }

    pub fn can_transition_to(self, next: ItemStatus) -> bool {
        matches!(
            (self, next),
            (Self::InBackpack, Self::Equipped)
                | (Self::Equipped, Self::InBackpack)
                | (Self::InBackpack, Self::InStore)
                | (Self::InStore, Self::InBackpack)
        )
    }

    /// Persisted representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InBackpack => "in_backpack",
            Self::InStore => "in_store",
            Self::Equipped => "equipped",
        }
    }
}

impl ValueObject for ItemStatus {}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_backpack" => Ok(Self::InBackpack),
            "in_store" => Ok(Self::InStore),
            "equipped" => Ok(Self::Equipped),
            other => Err(DomainError::validation(format!(
                "unknown item status {other:?}"
            ))),
        }
    }
}
