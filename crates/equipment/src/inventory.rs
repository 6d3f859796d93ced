use tracing::debug;

use armory_core::{DomainResult, InventoryId, ItemId};

use crate::container::{Container, ContainerKind, SlotNumber};
use crate::inventory_item::InventoryItem;
use crate::item_status::ItemStatus;

/// Container kind of a character's backpack.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Backpack;

impl ContainerKind for Backpack {
    type Id = InventoryId;

    const NAME: &'static str = "inventory";

    const ARRIVAL_STATUS: ItemStatus = ItemStatus::InBackpack;

    fn permits(status: ItemStatus) -> bool {
        matches!(status, ItemStatus::InBackpack | ItemStatus::Equipped)
    }
}

/// A character's backpack: carried and equipped items plus pocket money.
pub type Inventory = Container<Backpack>;

impl Container<Backpack> {
    pub const NUMBER_OF_SLOTS: usize = <Backpack as ContainerKind>::NUMBER_OF_SLOTS;

    /// Equip an item that is currently carried in the backpack.
    pub fn equip(&mut self, item_id: ItemId) -> DomainResult<()> {
        let slot = self.replace_in_place(item_id, |current| {
            current.with_status(ItemStatus::equipped())
        })?;
        debug!(inventory_id = %self.id(), item_id = %item_id, slot, "item equipped");
        Ok(())
    }

    /// Take an equipped item off and put it back in the backpack.
    pub fn unequip(&mut self, item_id: ItemId) -> DomainResult<()> {
        let slot = self.replace_in_place(item_id, |current| {
            current.with_status(ItemStatus::in_backpack())
        })?;
        debug!(inventory_id = %self.id(), item_id = %item_id, slot, "item unequipped");
        Ok(())
    }

    pub fn equipped_items(&self) -> impl Iterator<Item = (SlotNumber, &InventoryItem)> {
        self.items()
            .iter()
            .filter(|(_, inventory_item)| inventory_item.status().is_equipped())
            .map(|(slot, inventory_item)| (*slot, inventory_item))
    }
}
