//! Equipment domain module.
//!
//! This crate contains the business rules for character backpacks and
//! trading stores: slot capacity, item status changes, money arithmetic and
//! moves between containers. It is pure domain logic (no IO, no HTTP, no
//! storage); the [`persistence`] module only translates plain records.

pub mod capacity;
pub mod container;
pub mod inventory;
pub mod inventory_item;
pub mod item;
pub mod item_status;
pub mod money;
pub mod persistence;
pub mod store;
pub mod trade;
pub mod transfer;

pub use capacity::SlotCapacity;
pub use container::{Container, ContainerKind, DEFAULT_NUMBER_OF_SLOTS, MAX_SLOT_NUMBER, SlotNumber};
pub use inventory::{Backpack, Inventory};
pub use inventory_item::InventoryItem;
pub use item::{Item, ItemBuilder, ItemEffect, ItemType};
pub use item_status::ItemStatus;
pub use money::Money;
pub use persistence::{ContainerRecord, EffectRecord, ItemRecord};
pub use store::{Stall, Store};
pub use trade::buy_item;
pub use transfer::{move_item, move_item_to_inventory, move_item_to_store, move_money};
