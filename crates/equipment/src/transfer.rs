//! Moves between two containers.
//!
//! Every check runs before either container is touched, so a failed transfer
//! leaves both sides exactly as they were.

use tracing::{debug, warn};

use armory_core::{DomainError, DomainResult, ItemId};

use crate::container::{Container, ContainerKind, SlotNumber};
use crate::inventory::Inventory;
use crate::item_status::ItemStatus;
use crate::money::Money;
use crate::store::Store;

/// Move one item from `source` to `destination`, giving it `new_status`.
///
/// Returns the slot the item landed in.
pub fn move_item<S, D>(
    source: &mut Container<S>,
    destination: &mut Container<D>,
    item_id: ItemId,
    new_status: ItemStatus,
) -> DomainResult<SlotNumber>
where
    S: ContainerKind,
    D: ContainerKind,
{
    let checked = check_move(source, destination, item_id, new_status);
    if let Err(err) = checked {
        warn!(
            from = S::NAME,
            from_id = %source.id(),
            to = D::NAME,
            to_id = %destination.id(),
            item_id = %item_id,
            error = %err,
            "item move rejected"
        );
        return Err(err);
    }

    let moved = source.remove(item_id)?.into_status(new_status)?;
    let slot = destination.receive(moved)?;

    debug!(
        from = S::NAME,
        from_id = %source.id(),
        to = D::NAME,
        to_id = %destination.id(),
        item_id = %item_id,
        slot,
        status = %new_status,
        "item moved"
    );
    Ok(slot)
}

fn check_move<S, D>(
    source: &Container<S>,
    destination: &Container<D>,
    item_id: ItemId,
    new_status: ItemStatus,
) -> DomainResult<()>
where
    S: ContainerKind,
    D: ContainerKind,
{
    let (_, current) = source
        .find(item_id)
        .ok_or_else(|| source.missing(item_id))?;
    if !current.status().can_transition_to(new_status) {
        return Err(DomainError::state_transition(
            item_id,
            current.status().as_str(),
            new_status.as_str(),
        ));
    }
    destination.ensure_can_receive(item_id, new_status)
}

/// Put an item from the backpack up for sale.
pub fn move_item_to_store(
    inventory: &mut Inventory,
    store: &mut Store,
    item_id: ItemId,
) -> DomainResult<SlotNumber> {
    move_item(inventory, store, item_id, ItemStatus::in_store())
}

/// Take an item off sale and back into the backpack.
pub fn move_item_to_inventory(
    store: &mut Store,
    inventory: &mut Inventory,
    item_id: ItemId,
) -> DomainResult<SlotNumber> {
    move_item(store, inventory, item_id, ItemStatus::in_backpack())
}

/// Move `amount` from `source`'s balance to `destination`'s.
pub fn move_money<S, D>(
    source: &mut Container<S>,
    destination: &mut Container<D>,
    amount: Money,
) -> DomainResult<()>
where
    S: ContainerKind,
    D: ContainerKind,
{
    let (remaining, received) = match settle(source.money(), destination.money(), amount) {
        Ok(balances) => balances,
        Err(err) => {
            warn!(
                from = S::NAME,
                from_id = %source.id(),
                to = D::NAME,
                to_id = %destination.id(),
                amount = amount.value(),
                error = %err,
                "money move rejected"
            );
            return Err(err);
        }
    };

    source.set_money(remaining);
    destination.set_money(received);

    debug!(
        from = S::NAME,
        from_id = %source.id(),
        to = D::NAME,
        to_id = %destination.id(),
        amount = amount.value(),
        "money moved"
    );
    Ok(())
}

/// New balances of both sides, or the reason the move cannot happen.
fn settle(source: Money, destination: Money, amount: Money) -> DomainResult<(Money, Money)> {
    let remaining = source.subtract(amount)?;
    let received = destination.add(amount)?;
    Ok((remaining, received))
}
