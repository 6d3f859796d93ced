//! `armory-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the error taxonomy and the aggregate/entity/value-object traits.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CharacterId, InventoryId, ItemId, ItemPrototypeId, StoreId};
pub use value_object::ValueObject;
