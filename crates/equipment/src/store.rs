use tracing::debug;

use armory_core::{DomainResult, ItemId, StoreId};

use crate::container::{Container, ContainerKind};
use crate::item_status::ItemStatus;
use crate::money::Money;

/// Container kind of a character's trading store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Stall;

impl ContainerKind for Stall {
    type Id = StoreId;

    const NAME: &'static str = "store";

    const ARRIVAL_STATUS: ItemStatus = ItemStatus::InStore;

    fn permits(status: ItemStatus) -> bool {
        status.is_in_store()
    }
}

/// Items a character offers for sale, plus the store's takings.
pub type Store = Container<Stall>;

impl Container<Stall> {
    pub const NUMBER_OF_SLOTS: usize = <Stall as ContainerKind>::NUMBER_OF_SLOTS;

    /// Change the asking price of an item on offer. The item keeps its slot.
    pub fn change_item_price(&mut self, item_id: ItemId, price: Money) -> DomainResult<()> {
        let slot = self.replace_in_place(item_id, |current| {
            let repriced = current.item().with_price(price);
            Ok(current.clone().with_item(repriced))
        })?;
        debug!(store_id = %self.id(), item_id = %item_id, slot, price = price.value(), "item price changed");
        Ok(())
    }

    /// Asking price of an item on offer.
    pub fn price_of(&self, item_id: ItemId) -> DomainResult<Money> {
        self.find(item_id)
            .map(|(_, inventory_item)| inventory_item.item().price())
            .ok_or_else(|| self.missing(item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::generate_items;
    use armory_core::CharacterId;

    fn store_with(count: usize) -> Store {
        Store::new(
            StoreId::new(),
            CharacterId::new(),
            generate_items(count, ItemStatus::InStore),
            Money::zero(),
        )
        .unwrap()
    }

    #[test]
    fn store_has_twenty_slots() {
        assert_eq!(Store::NUMBER_OF_SLOTS, 20);
    }

    #[test]
    fn change_item_price_keeps_slot_and_status() {
        let mut store = store_with(3);
        let item_id = store.get(2).unwrap().id();

        store.change_item_price(item_id, Money::from(250)).unwrap();

        assert_eq!(store.price_of(item_id).unwrap(), Money::from(250));
        assert_eq!(store.slot_of(item_id), Some(2));
        assert_eq!(store.get(2).unwrap().status(), ItemStatus::InStore);
    }

    #[test]
    fn change_price_of_unknown_item_is_not_found() {
        let mut store = store_with(1);
        let err = store.change_item_price(ItemId::new(), Money::from(1)).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.price_of(ItemId::new()).unwrap_err().is_not_found());
    }

    #[test]
    fn store_items_cannot_be_equipped_from_the_store() {
        let store = store_with(1);
        let err = store
            .get(0)
            .unwrap()
            .with_status(ItemStatus::equipped())
            .unwrap_err();
        assert!(err.is_state_transition());
    }
}
