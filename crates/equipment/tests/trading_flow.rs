use armory_core::{CharacterId, DomainError, InventoryId, ItemId, ItemPrototypeId, StoreId};
use armory_equipment::{
    ContainerRecord, Inventory, Item, ItemEffect, ItemStatus, ItemType, Money, Store, buy_item,
    move_item_to_inventory, move_item_to_store, move_money,
};

fn crafted_item(name: &str, item_type: ItemType, price: u64, creator: CharacterId) -> Item {
    Item::builder(ItemId::new())
        .name(name)
        .description(format!("{name}, hand made."))
        .image_file_path(format!("items/{}.png", name.to_lowercase().replace(' ', "-")))
        .item_type(item_type)
        .effect(ItemEffect::new("strength", 1).unwrap())
        .price(Money::from(price))
        .prototype_id(ItemPrototypeId::new())
        .creator_character_id(creator)
        .build()
        .unwrap()
}

/// Persist-and-reload, as the application layer would between requests.
fn reload_inventory(inventory: &Inventory) -> Inventory {
    let json = ContainerRecord::from_container(inventory)
        .unwrap()
        .to_json()
        .unwrap();
    ContainerRecord::from_json(&json)
        .unwrap()
        .reconstitute_inventory()
        .unwrap()
}

fn reload_store(store: &Store) -> Store {
    let json = ContainerRecord::from_container(store)
        .unwrap()
        .to_json()
        .unwrap();
    ContainerRecord::from_json(&json)
        .unwrap()
        .reconstitute_store()
        .unwrap()
}

#[test]
fn smith_sells_a_sword_to_a_knight() {
    armory_observability::init();

    let smith = CharacterId::new();
    let knight = CharacterId::new();

    let mut smith_inventory = Inventory::empty(InventoryId::new(), smith);
    let mut smith_store = Store::empty(StoreId::new(), smith);
    let mut knight_inventory = Inventory::empty(InventoryId::new(), knight);
    knight_inventory.put_money_in(Money::from(50)).unwrap();

    let sword = crafted_item("Long sword", ItemType::Weapon, 30, smith);
    let sword_id = sword.id();
    smith_inventory.add(sword).unwrap();

    // A request boundary: state goes through its stored form.
    let mut smith_inventory = reload_inventory(&smith_inventory);

    move_item_to_store(&mut smith_inventory, &mut smith_store, sword_id).unwrap();
    smith_store.change_item_price(sword_id, Money::from(45)).unwrap();

    let mut smith_store = reload_store(&smith_store);
    assert!(smith_inventory.is_empty());
    assert_eq!(smith_store.price_of(sword_id).unwrap(), Money::from(45));

    let slot = buy_item(&mut smith_store, &mut knight_inventory, sword_id).unwrap();
    knight_inventory.equip(sword_id).unwrap();

    let knight_inventory = reload_inventory(&knight_inventory);
    assert_eq!(knight_inventory.get(slot).unwrap().status(), ItemStatus::Equipped);
    assert_eq!(
        knight_inventory.get(slot).unwrap().item().creator_character_id(),
        Some(smith)
    );
    assert_eq!(knight_inventory.money(), Money::from(5));

    move_money(&mut smith_store, &mut smith_inventory, Money::from(45)).unwrap();
    assert_eq!(smith_store.money(), Money::zero());
    assert_eq!(smith_inventory.money(), Money::from(45));
}

#[test]
fn unsold_item_goes_back_to_the_backpack_and_can_be_worn() {
    armory_observability::init();

    let owner = CharacterId::new();
    let mut inventory = Inventory::empty(InventoryId::new(), owner);
    let mut store = Store::empty(StoreId::new(), owner);

    let ring = crafted_item("Copper ring", ItemType::Ring, 8, owner);
    let ring_id = ring.id();
    store.add(ring).unwrap();

    let err = buy_item(&mut store, &mut inventory, ring_id).unwrap_err();
    assert!(err.is_validation());

    move_item_to_inventory(&mut store, &mut inventory, ring_id).unwrap();
    inventory.equip(ring_id).unwrap();

    let err = move_item_to_store(&mut inventory, &mut store, ring_id).unwrap_err();
    assert!(matches!(
        err,
        DomainError::StateTransition {
            from: "equipped",
            to: "in_store",
            ..
        }
    ));
    assert!(store.is_empty());
    assert_eq!(inventory.len(), 1);
}
