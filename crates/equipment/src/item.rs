use core::str::FromStr;

use serde::{Deserialize, Serialize};

use armory_core::{CharacterId, DomainError, DomainResult, Entity, ItemId, ItemPrototypeId};

use crate::money::Money;

/// Item category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Helmet,
    Shield,
    Boots,
    Gloves,
    Amulet,
    Ring,
    Potion,
    Miscellaneous,
}

impl ItemType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Helmet => "helmet",
            Self::Shield => "shield",
            Self::Boots => "boots",
            Self::Gloves => "gloves",
            Self::Amulet => "amulet",
            Self::Ring => "ring",
            Self::Potion => "potion",
            Self::Miscellaneous => "miscellaneous",
        }
    }
}

impl core::fmt::Display for ItemType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "weapon" => Self::Weapon,
            "armor" => Self::Armor,
            "helmet" => Self::Helmet,
            "shield" => Self::Shield,
            "boots" => Self::Boots,
            "gloves" => Self::Gloves,
            "amulet" => Self::Amulet,
            "ring" => Self::Ring,
            "potion" => Self::Potion,
            "miscellaneous" => Self::Miscellaneous,
            other => {
                return Err(DomainError::validation(format!("unknown item type {other:?}")));
            }
        })
    }
}

/// A gameplay modifier granted by an item (e.g. `strength +2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ItemEffect {
    attribute: String,
    modifier: i32,
}

impl ItemEffect {
    pub fn new(attribute: impl Into<String>, modifier: i32) -> DomainResult<Self> {
        let attribute = attribute.into();
        if attribute.trim().is_empty() {
            return Err(DomainError::validation("effect attribute cannot be empty"));
        }
        Ok(Self {
            attribute,
            modifier,
        })
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }
}

/// Immutable description of a single item instance.
///
/// Items carry no mutable state; where an item sits and whether it is worn
/// is tracked by [`crate::InventoryItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    image_file_path: String,
    item_type: ItemType,
    effects: Vec<ItemEffect>,
    price: Money,
    prototype_id: ItemPrototypeId,
    creator_character_id: Option<CharacterId>,
}

impl Item {
    pub fn builder(id: ItemId) -> ItemBuilder {
        ItemBuilder::new(id)
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_file_path(&self) -> &str {
        &self.image_file_path
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn effects(&self) -> &[ItemEffect] {
        &self.effects
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn prototype_id(&self) -> ItemPrototypeId {
        self.prototype_id
    }

    /// Set for crafted items only.
    pub fn creator_character_id(&self) -> Option<CharacterId> {
        self.creator_character_id
    }

    /// Same item, new asking price.
    pub fn with_price(&self, price: Money) -> Item {
        Item {
            price,
            ..self.clone()
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Collects item fields; [`ItemBuilder::build`] rejects missing mandatory ones.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    id: ItemId,
    name: Option<String>,
    description: String,
    image_file_path: String,
    item_type: Option<ItemType>,
    effects: Vec<ItemEffect>,
    price: Option<Money>,
    prototype_id: Option<ItemPrototypeId>,
    creator_character_id: Option<CharacterId>,
}

impl ItemBuilder {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: None,
            description: String::new(),
            image_file_path: String::new(),
            item_type: None,
            effects: Vec::new(),
            price: None,
            prototype_id: None,
            creator_character_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn image_file_path(mut self, path: impl Into<String>) -> Self {
        self.image_file_path = path.into();
        self
    }

    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn effect(mut self, effect: ItemEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn effects(mut self, effects: impl IntoIterator<Item = ItemEffect>) -> Self {
        self.effects.extend(effects);
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn prototype_id(mut self, prototype_id: ItemPrototypeId) -> Self {
        self.prototype_id = Some(prototype_id);
        self
    }

    pub fn creator_character_id(mut self, creator: CharacterId) -> Self {
        self.creator_character_id = Some(creator);
        self
    }

    pub fn build(self) -> DomainResult<Item> {
        let name = self
            .name
            .ok_or_else(|| DomainError::validation(format!("item {} is missing a name", self.id)))?;
        if name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "item {} name cannot be empty",
                self.id
            )));
        }
        let item_type = self
            .item_type
            .ok_or_else(|| DomainError::validation(format!("item {} is missing a type", self.id)))?;
        let price = self
            .price
            .ok_or_else(|| DomainError::validation(format!("item {} is missing a price", self.id)))?;
        let prototype_id = self.prototype_id.ok_or_else(|| {
            DomainError::validation(format!("item {} is missing a prototype", self.id))
        })?;

        Ok(Item {
            id: self.id,
            name,
            description: self.description,
            image_file_path: self.image_file_path,
            item_type,
            effects: self.effects,
            price,
            prototype_id,
            creator_character_id: self.creator_character_id,
        })
    }
}
