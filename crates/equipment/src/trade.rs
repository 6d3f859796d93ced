//! Buying from another character's store.

use tracing::{debug, warn};

use armory_core::{DomainError, DomainResult, ItemId};

use crate::container::SlotNumber;
use crate::inventory::Inventory;
use crate::item_status::ItemStatus;
use crate::money::Money;
use crate::store::Store;
use crate::transfer;

/// Buy `item_id` from `store` at its asking price into `buyer`'s backpack.
///
/// Returns the backpack slot the item landed in.
pub fn buy_item(store: &mut Store, buyer: &mut Inventory, item_id: ItemId) -> DomainResult<SlotNumber> {
    let price = match check_purchase(store, buyer, item_id) {
        Ok(price) => price,
        Err(err) => {
            warn!(
                store_id = %store.id(),
                buyer_id = %buyer.owner_id(),
                item_id = %item_id,
                error = %err,
                "purchase rejected"
            );
            return Err(err);
        }
    };

    transfer::move_money(buyer, store, price)?;
    let slot = transfer::move_item(store, buyer, item_id, ItemStatus::in_backpack())?;

    debug!(
        store_id = %store.id(),
        buyer_id = %buyer.owner_id(),
        item_id = %item_id,
        price = price.value(),
        slot,
        "item bought"
    );
    Ok(slot)
}

/// Asking price, if every precondition of the purchase holds.
fn check_purchase(store: &Store, buyer: &Inventory, item_id: ItemId) -> DomainResult<Money> {
    if store.owner_id() == buyer.owner_id() {
        return Err(DomainError::validation(format!(
            "character {} cannot buy from their own store",
            buyer.owner_id()
        )));
    }

    let price = store.price_of(item_id)?;
    buyer.ensure_can_receive(item_id, ItemStatus::InBackpack)?;
    buyer.money().subtract(price)?;
    store.money().add(price)?;
    Ok(price)
}
