//! Fixed-capacity, slot-indexed item containers with a money balance.
//!
//! [`Container`] owns the rules every container kind shares (capacity, slot
//! assignment, money). The kind parameter decides which item statuses are
//! allowed inside and which status a freshly added item receives; see
//! [`crate::Inventory`] and [`crate::Store`].

use std::collections::{BTreeMap, HashSet};
use std::marker::PhantomData;

use tracing::debug;

use armory_core::{AggregateRoot, CharacterId, DomainError, DomainResult, ItemId};

use crate::capacity::SlotCapacity;
use crate::inventory_item::InventoryItem;
use crate::item::Item;
use crate::item_status::ItemStatus;
use crate::money::Money;

/// Position of an item inside a container.
pub type SlotNumber = usize;

/// Slot count shared by backpacks and stores unless a kind overrides it.
pub const DEFAULT_NUMBER_OF_SLOTS: usize = 20;

/// Highest slot number a container may use; slots are stored as `i64`.
pub const MAX_SLOT_NUMBER: SlotNumber = i64::MAX as SlotNumber;

/// Static description of a container kind.
pub trait ContainerKind: core::fmt::Debug + Clone + PartialEq + Eq + 'static {
    /// Identifier type of containers of this kind.
    type Id: Copy
        + Eq
        + core::hash::Hash
        + core::fmt::Debug
        + core::fmt::Display
        + core::str::FromStr<Err = DomainError>;

    /// Human-readable kind name used in errors and logs.
    const NAME: &'static str;

    const NUMBER_OF_SLOTS: usize = DEFAULT_NUMBER_OF_SLOTS;

    /// Status given to an item placed into this container.
    const ARRIVAL_STATUS: ItemStatus;

    /// Whether an item with `status` may sit in this kind of container.
    fn permits(status: ItemStatus) -> bool;

    fn capacity() -> SlotCapacity {
        SlotCapacity::new(Self::NUMBER_OF_SLOTS)
    }
}

/// Aggregate root: a container of [`InventoryItem`]s plus a [`Money`] balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<K: ContainerKind> {
    id: K::Id,
    owner_id: CharacterId,
    items: BTreeMap<SlotNumber, InventoryItem>,
    money: Money,
    kind: PhantomData<K>,
}

impl<K: ContainerKind> Container<K> {
    /// Build a container from already-validated parts (fresh or reconstituted).
    ///
    /// The map is taken by value, so the caller keeps no handle on the
    /// container's contents.
    pub fn new(
        id: K::Id,
        owner_id: CharacterId,
        items: BTreeMap<SlotNumber, InventoryItem>,
        money: Money,
    ) -> DomainResult<Self> {
        K::capacity().ensure_fits(items.len())?;

        let mut seen = HashSet::with_capacity(items.len());
        for (slot, inventory_item) in &items {
            if *slot > MAX_SLOT_NUMBER {
                return Err(DomainError::validation(format!(
                    "slot {slot} of {} {id} is beyond the last slot number {MAX_SLOT_NUMBER}",
                    K::NAME,
                )));
            }
            if !K::permits(inventory_item.status()) {
                return Err(DomainError::validation(format!(
                    "{} cannot hold item {} with status {} (slot {slot})",
                    K::NAME,
                    inventory_item.id(),
                    inventory_item.status(),
                )));
            }
            if !seen.insert(inventory_item.id()) {
                return Err(DomainError::validation(format!(
                    "item {} occupies more than one slot in {} {id}",
                    inventory_item.id(),
                    K::NAME,
                )));
            }
        }

        Ok(Self {
            id,
            owner_id,
            items,
            money,
            kind: PhantomData,
        })
    }

    /// A new container with no items and no money.
    pub fn empty(id: K::Id, owner_id: CharacterId) -> Self {
        Self {
            id,
            owner_id,
            items: BTreeMap::new(),
            money: Money::zero(),
            kind: PhantomData,
        }
    }

    pub fn id(&self) -> K::Id {
        self.id
    }

    pub fn owner_id(&self) -> CharacterId {
        self.owner_id
    }

    pub fn money(&self) -> Money {
        self.money
    }

    /// Read-only view of the slot map.
    pub fn items(&self) -> &BTreeMap<SlotNumber, InventoryItem> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        K::NUMBER_OF_SLOTS
    }

    pub fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    pub fn free_slots(&self) -> usize {
        K::capacity().free_slots(self.items.len())
    }

    pub fn get(&self, slot: SlotNumber) -> Option<&InventoryItem> {
        self.items.get(&slot)
    }

    pub fn find(&self, item_id: ItemId) -> Option<(SlotNumber, &InventoryItem)> {
        self.items
            .iter()
            .find(|(_, inventory_item)| inventory_item.id() == item_id)
            .map(|(slot, inventory_item)| (*slot, inventory_item))
    }

    pub fn slot_of(&self, item_id: ItemId) -> Option<SlotNumber> {
        self.find(item_id).map(|(slot, _)| slot)
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.find(item_id).is_some()
    }

    /// Put a new item into the next free slot with the kind's arrival status.
    ///
    /// This is the only way a raw [`Item`] enters a container.
    pub fn add(&mut self, item: Item) -> DomainResult<SlotNumber> {
        self.receive(InventoryItem::new(item, K::ARRIVAL_STATUS))
    }

    /// Take an item out of its slot. Remaining slots keep their numbers.
    pub fn remove(&mut self, item_id: ItemId) -> DomainResult<InventoryItem> {
        let slot = self.require_slot(item_id)?;
        let removed = self
            .items
            .remove(&slot)
            .ok_or_else(|| self.missing(item_id))?;

        debug!(container = K::NAME, id = %self.id, item_id = %item_id, slot, "item removed");
        Ok(removed)
    }

    pub fn put_money_in(&mut self, amount: Money) -> DomainResult<()> {
        self.money = self.money.add(amount)?;
        debug!(container = K::NAME, id = %self.id, amount = amount.value(), balance = self.money.value(), "money put in");
        Ok(())
    }

    pub fn take_money_out(&mut self, amount: Money) -> DomainResult<()> {
        self.money = self.money.subtract(amount)?;
        debug!(container = K::NAME, id = %self.id, amount = amount.value(), balance = self.money.value(), "money taken out");
        Ok(())
    }

    /// Slot the next inserted item will get: one past the highest occupied
    /// slot. Gaps left by removals are not refilled, so once an item has been
    /// removed slot numbers can run past `NUMBER_OF_SLOTS - 1`; address items
    /// by id or iterate [`Container::items`] rather than indexing `0..capacity`.
    ///
    /// Fails when the highest occupied slot is already [`MAX_SLOT_NUMBER`].
    pub fn next_slot(&self) -> DomainResult<SlotNumber> {
        let Some(&last) = self.items.keys().next_back() else {
            return Ok(0);
        };
        last.checked_add(1)
            .filter(|next| *next <= MAX_SLOT_NUMBER)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "{} {} has no slot number left after {last}",
                    K::NAME,
                    self.id
                ))
            })
    }

    /// Checks everything [`Container::receive`] would check, without mutating.
    pub(crate) fn ensure_can_receive(&self, item_id: ItemId, status: ItemStatus) -> DomainResult<()> {
        if !K::permits(status) {
            return Err(DomainError::validation(format!(
                "{} cannot hold item {item_id} with status {status}",
                K::NAME
            )));
        }
        if self.contains(item_id) {
            return Err(DomainError::validation(format!(
                "item {item_id} is already in {} {}",
                K::NAME,
                self.id
            )));
        }
        K::capacity().ensure_room_for_one_more(self.items.len())?;
        self.next_slot().map(|_| ())
    }

    pub(crate) fn receive(&mut self, inventory_item: InventoryItem) -> DomainResult<SlotNumber> {
        self.ensure_can_receive(inventory_item.id(), inventory_item.status())?;

        let slot = self.next_slot()?;
        let item_id = inventory_item.id();
        let status = inventory_item.status();
        self.items.insert(slot, inventory_item);

        debug!(container = K::NAME, id = %self.id, item_id = %item_id, slot, %status, "item placed");
        Ok(slot)
    }

    pub(crate) fn set_money(&mut self, money: Money) {
        self.money = money;
    }

    /// Swap the item at `item_id`'s slot for `f(current)`, keeping the slot.
    pub(crate) fn replace_in_place<F>(&mut self, item_id: ItemId, f: F) -> DomainResult<SlotNumber>
    where
        F: FnOnce(&InventoryItem) -> DomainResult<InventoryItem>,
    {
        let slot = self.require_slot(item_id)?;
        let current = self.items.get(&slot).ok_or_else(|| self.missing(item_id))?;
        let replacement = f(current)?;
        if !K::permits(replacement.status()) {
            return Err(DomainError::validation(format!(
                "{} cannot hold item {item_id} with status {}",
                K::NAME,
                replacement.status()
            )));
        }
        self.items.insert(slot, replacement);
        Ok(slot)
    }

    pub(crate) fn require_slot(&self, item_id: ItemId) -> DomainResult<SlotNumber> {
        self.slot_of(item_id).ok_or_else(|| self.missing(item_id))
    }

    pub(crate) fn missing(&self, item_id: ItemId) -> DomainError {
        DomainError::not_found(format!("item {item_id} in {} {}", K::NAME, self.id))
    }
}

impl<K: ContainerKind> AggregateRoot for Container<K> {
    type Id = K::Id;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
