use serde::Serialize;

use armory_core::{DomainError, DomainResult, ItemId, ValueObject};

use crate::item::Item;
use crate::item_status::ItemStatus;

/// An [`Item`] together with its status inside one container.
///
/// Two inventory items are equal when they refer to the same item identity
/// and carry the same status.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryItem {
    item: Item,
    status: ItemStatus,
}

impl InventoryItem {
    pub fn new(item: Item, status: ItemStatus) -> Self {
        Self { item, status }
    }

    pub fn with_status(&self, status: ItemStatus) -> DomainResult<InventoryItem> {
        self.clone().into_status(status)
    }

    /// Consuming form of [`InventoryItem::with_status`], used when the value
    /// leaves its container anyway.
    pub fn into_status(self, status: ItemStatus) -> DomainResult<InventoryItem> {
        if !self.status.can_transition_to(status) {
            return Err(DomainError::state_transition(
                self.item.id(),
                self.status.as_str(),
                status.as_str(),
            ));
        }
        Ok(Self {
            item: self.item,
            status,
        })
    }

    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn into_item(self) -> Item {
        self.item
    }

    /// Replace the underlying item description, keeping the status.
    pub(crate) fn with_item(self, item: Item) -> Self {
        Self {
            item,
            status: self.status,
        }
    }
}

impl PartialEq for InventoryItem {
    fn eq(&self, other: &Self) -> bool {
        self.item.id() == other.item.id() && self.status == other.status
    }
}

impl Eq for InventoryItem {}

impl ValueObject for InventoryItem {}
