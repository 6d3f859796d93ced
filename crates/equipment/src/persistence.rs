//! Plain records for the persistence layer and their translation to and
//! from container aggregates.
//!
//! Records are untrusted: every field is re-validated on the way in and any
//! inconsistency comes back as a [`DomainError`], the same taxonomy the
//! aggregates use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use armory_core::{CharacterId, DomainError, DomainResult, ItemId, ItemPrototypeId};

use crate::container::{Container, ContainerKind, SlotNumber};
use crate::inventory::Inventory;
use crate::inventory_item::InventoryItem;
use crate::item::{Item, ItemEffect};
use crate::item_status::ItemStatus;
use crate::money::Money;
use crate::store::Store;

/// Stored shape of an inventory or a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: String,
    pub owner_id: String,
    pub money: i64,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// Stored shape of one occupied slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub slot_number: i64,
    pub item_id: String,
    pub status: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_file_path: String,
    pub item_type: String,
    #[serde(default)]
    pub effects: Vec<EffectRecord>,
    pub price: i64,
    pub prototype_id: String,
    #[serde(default)]
    pub creator_character_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectRecord {
    pub attribute: String,
    pub modifier: i32,
}

impl ContainerRecord {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed container record: {e}")))
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::validation(format!("unserializable container record: {e}")))
    }

    /// Rebuild a container aggregate from its stored record.
    pub fn reconstitute<K: ContainerKind>(&self) -> DomainResult<Container<K>> {
        let id = self.id.parse::<K::Id>()?;
        let owner_id = CharacterId::from_string(&self.owner_id)?;
        let money = Money::new(self.money)?;

        let mut items = BTreeMap::new();
        for record in &self.items {
            let (slot, inventory_item) = record.to_inventory_item()?;
            if items.insert(slot, inventory_item).is_some() {
                return Err(DomainError::validation(format!(
                    "{} {id} has more than one item in slot {slot}",
                    K::NAME
                )));
            }
        }

        Container::new(id, owner_id, items, money)
    }

    pub fn reconstitute_inventory(&self) -> DomainResult<Inventory> {
        self.reconstitute()
    }

    pub fn reconstitute_store(&self) -> DomainResult<Store> {
        self.reconstitute()
    }

    /// Snapshot a container for a full-replace write.
    pub fn from_container<K: ContainerKind>(container: &Container<K>) -> DomainResult<Self> {
        let items = container
            .items()
            .iter()
            .map(|(slot, inventory_item)| ItemRecord::from_inventory_item(*slot, inventory_item))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            id: container.id().to_string(),
            owner_id: container.owner_id().to_string(),
            money: to_stored_amount(container.money())?,
            items,
        })
    }
}

impl ItemRecord {
    pub fn to_inventory_item(&self) -> DomainResult<(SlotNumber, InventoryItem)> {
        let slot = SlotNumber::try_from(self.slot_number).map_err(|_| {
            DomainError::validation(format!(
                "item {} has invalid slot number {}",
                self.item_id, self.slot_number
            ))
        })?;
        let status = self.status.parse::<ItemStatus>()?;

        Ok((slot, InventoryItem::new(self.to_item()?, status)))
    }

    pub fn to_item(&self) -> DomainResult<Item> {
        let effects = self
            .effects
            .iter()
            .map(|effect| ItemEffect::new(effect.attribute.clone(), effect.modifier))
            .collect::<DomainResult<Vec<_>>>()?;

        let mut builder = Item::builder(ItemId::from_string(&self.item_id)?)
            .name(self.name.clone())
            .description(self.description.clone())
            .image_file_path(self.image_file_path.clone())
            .item_type(self.item_type.parse()?)
            .effects(effects)
            .price(Money::new(self.price)?)
            .prototype_id(ItemPrototypeId::from_string(&self.prototype_id)?);

        if let Some(creator) = &self.creator_character_id {
            builder = builder.creator_character_id(CharacterId::from_string(creator)?);
        }

        builder.build()
    }

    pub fn from_inventory_item(slot: SlotNumber, inventory_item: &InventoryItem) -> DomainResult<Self> {
        let item = inventory_item.item();
        let slot_number = i64::try_from(slot)
            .map_err(|_| DomainError::validation(format!("slot {slot} cannot be stored")))?;

        Ok(Self {
            slot_number,
            item_id: item.id().to_string(),
            status: inventory_item.status().as_str().to_string(),
            name: item.name().to_string(),
            description: item.description().to_string(),
            image_file_path: item.image_file_path().to_string(),
            item_type: item.item_type().as_str().to_string(),
            effects: item
                .effects()
                .iter()
                .map(|effect| EffectRecord {
                    attribute: effect.attribute().to_string(),
                    modifier: effect.modifier(),
                })
                .collect(),
            price: to_stored_amount(item.price())?,
            prototype_id: item.prototype_id().to_string(),
            creator_character_id: item.creator_character_id().map(|id| id.to_string()),
        })
    }
}

fn to_stored_amount(money: Money) -> DomainResult<i64> {
    i64::try_from(money.value())
        .map_err(|_| DomainError::validation(format!("amount {money} cannot be stored")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;
    use armory_core::{InventoryId, StoreId};

    fn item_record(slot_number: i64, status: &str) -> ItemRecord {
        ItemRecord {
            slot_number,
            item_id: ItemId::new().to_string(),
            status: status.to_string(),
            name: "Oak shield".to_string(),
            description: "Round and heavy.".to_string(),
            image_file_path: "items/oak-shield.png".to_string(),
            item_type: "shield".to_string(),
            effects: vec![EffectRecord {
                attribute: "defence".to_string(),
                modifier: 3,
            }],
            price: 40,
            prototype_id: ItemPrototypeId::new().to_string(),
            creator_character_id: Some(CharacterId::new().to_string()),
        }
    }

    fn inventory_record(items: Vec<ItemRecord>) -> ContainerRecord {
        ContainerRecord {
            id: InventoryId::new().to_string(),
            owner_id: CharacterId::new().to_string(),
            money: 25,
            items,
        }
    }

    #[test]
    fn reconstitutes_items_at_their_stored_slots() {
        let record = inventory_record(vec![item_record(3, "in_backpack"), item_record(7, "equipped")]);

        let inventory = record.reconstitute_inventory().unwrap();

        assert_eq!(inventory.items().keys().copied().collect::<Vec<_>>(), vec![3, 7]);
        assert_eq!(inventory.get(7).unwrap().status(), ItemStatus::Equipped);
        assert_eq!(inventory.get(3).unwrap().item().item_type(), ItemType::Shield);
        assert_eq!(inventory.money(), Money::from(25));
        assert_eq!(inventory.next_slot(), Ok(8));
    }

    #[test]
    fn snapshot_matches_the_record_it_came_from() {
        let record = inventory_record(vec![item_record(0, "in_backpack"), item_record(1, "equipped")]);
        let inventory = record.reconstitute_inventory().unwrap();

        let snapshot = ContainerRecord::from_container(&inventory).unwrap();

        assert_eq!(snapshot, record);
    }

    #[test]
    fn parses_json_with_optional_fields_missing() {
        let json = format!(
            r#"{{
                "id": "{}",
                "owner_id": "{}",
                "money": 0,
                "items": [{{
                    "slot_number": 0,
                    "item_id": "{}",
                    "status": "in_store",
                    "name": "Healing draught",
                    "item_type": "potion",
                    "price": 5,
                    "prototype_id": "{}"
                }}]
            }}"#,
            StoreId::new(),
            CharacterId::new(),
            ItemId::new(),
            ItemPrototypeId::new(),
        );

        let store = ContainerRecord::from_json(&json).unwrap().reconstitute_store().unwrap();

        let offered = store.get(0).unwrap();
        assert_eq!(offered.status(), ItemStatus::InStore);
        assert!(offered.item().effects().is_empty());
        assert_eq!(offered.item().creator_character_id(), None);
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        assert!(ContainerRecord::from_json("{").unwrap_err().is_validation());
    }

    #[test]
    fn duplicate_slot_numbers_are_rejected() {
        let record = inventory_record(vec![item_record(2, "in_backpack"), item_record(2, "in_backpack")]);
        let err = record.reconstitute_inventory().unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("slot 2") => {}
            other => panic!("Expected Validation for duplicate slot, got {other:?}"),
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let record = inventory_record(vec![item_record(0, "on_loan")]);
        assert!(record.reconstitute_inventory().unwrap_err().is_validation());
    }

    #[test]
    fn negative_slot_number_is_rejected() {
        let record = inventory_record(vec![item_record(-1, "in_backpack")]);
        assert!(record.reconstitute_inventory().unwrap_err().is_validation());
    }

    #[test]
    fn container_loaded_at_the_last_storable_slot_refuses_new_items() {
        let record = inventory_record(vec![item_record(i64::MAX, "in_backpack")]);
        let mut inventory = record.reconstitute_inventory().unwrap();

        let err = inventory.add(crate::test_support::test_item()).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(inventory.len(), 1);
        assert_eq!(ContainerRecord::from_container(&inventory).unwrap(), record);
    }

    #[test]
    fn negative_money_is_rejected() {
        let mut record = inventory_record(Vec::new());
        record.money = -3;
        assert!(record.reconstitute_inventory().unwrap_err().is_validation());
    }

    #[test]
    fn malformed_identifiers_are_rejected() {
        let mut record = inventory_record(Vec::new());
        record.owner_id = "character-42".to_string();
        assert!(record.reconstitute_inventory().unwrap_err().is_validation());

        let mut bad_item = item_record(0, "in_backpack");
        bad_item.prototype_id = String::new();
        let record = inventory_record(vec![bad_item]);
        assert!(record.reconstitute_inventory().unwrap_err().is_validation());
    }

    #[test]
    fn backpack_status_in_a_store_record_is_rejected() {
        let mut record = inventory_record(vec![item_record(0, "in_backpack")]);
        record.id = StoreId::new().to_string();
        assert!(record.reconstitute_store().unwrap_err().is_validation());
    }

    #[test]
    fn too_many_stored_items_exceed_capacity() {
        let items = (0..=Inventory::NUMBER_OF_SLOTS as i64)
            .map(|slot| item_record(slot, "in_backpack"))
            .collect();
        let err = inventory_record(items).reconstitute_inventory().unwrap_err();
        assert!(err.is_capacity_exceeded());
    }
}
