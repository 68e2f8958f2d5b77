use oregon_trail::core::caravan::{Caravan, Member};
use oregon_trail::core::combat::Weapon;
use oregon_trail::core::grid::GridPos;
use oregon_trail::core::inventory::*;
use oregon_trail::core::player::{Player, Profession};
use oregon_trail::error::GameError;

fn names(inv: &Inventory) -> Vec<String> {
    inv.iter().map(|i| i.name.clone()).collect()
}

fn mixed() -> Inventory {
    let mut inv = Inventory::default();
    inv.add(Item::ammo(Weapon::Rifle, 5)).unwrap();
    inv.add(Item::food(8)).unwrap();
    inv.add(Item::new("Bandages", Category::Medicine, 2, "")).unwrap();
    inv.add(Item::ammo(Weapon::Revolver, 2)).unwrap();
    inv.add(Item::medkit(1)).unwrap();
    inv.add(Item::new("Jerky", Category::Food, 8, "")).unwrap();
    inv
}

fn player() -> Player {
    Player::new("Ana", Profession::Farmer, GridPos::new(5, 5))
}

// ── contents ──────────────────────────────────────────────────────────────────

#[test]
fn starter_kit() {
    let inv = Inventory::starter();
    assert_eq!(inv.len(), 4);
    assert_eq!(inv.linear_search_by_name("food").map(|i| i.quantity), Some(10));
    assert_eq!(inv.linear_search_by_name("Medkit").map(|i| i.quantity), Some(3));
    assert_eq!(inv.linear_search_by_name("Rifle ammo").map(|i| i.quantity), Some(50));
    assert_eq!(inv.linear_search_by_name("revolver AMMO").map(|i| i.quantity), Some(30));
}

#[test]
fn same_name_stacks_without_a_new_slot() {
    let mut inv = Inventory::new(1);
    inv.add(Item::food(2)).unwrap();
    inv.add(Item::food(3)).unwrap();
    assert_eq!(inv.len(), 1);
    assert_eq!(inv.total_quantity(), 5);
    assert!(matches!(inv.add(Item::medkit(1)), Err(GameError::InventoryFull { capacity: 1 })));
    assert!(inv.has_room_for("Food"));
    assert!(!inv.has_room_for("Medkit"));
}

#[test]
fn same_name_other_category_is_refused() {
    let mut inv = Inventory::starter();
    let err = inv.add(Item::new("food", Category::Medicine, 4, "")).unwrap_err();
    assert!(matches!(err, GameError::CategoryMismatch { category: "Food", .. }));
    let food = inv.linear_search_by_name("Food").unwrap();
    assert_eq!((food.quantity, food.category), (10, Category::Food));
    assert_eq!(inv.len(), 4);
}

#[test]
fn remove_missing_is_an_error() {
    let mut inv = Inventory::starter();
    assert!(matches!(inv.remove("Whiskey"), Err(GameError::ItemNotFound(_))));
    assert_eq!(inv.remove("medkit").unwrap().quantity, 3);
    assert_eq!(inv.len(), 3);
    assert!(inv.linear_search_by_name("Medkit").is_none());
}

// ── sorting ───────────────────────────────────────────────────────────────────

#[test]
fn bubble_sorts_by_category_label() {
    let mut inv = mixed();
    inv.sort_by_type_bubble();
    assert_eq!(names(&inv), vec!["Rifle ammo", "Revolver ammo", "Food", "Jerky", "Bandages", "Medkit"]);
}

#[test]
fn selection_sorts_by_quantity_stably() {
    let mut inv = mixed();
    inv.sort_by_quantity_selection();
    let q: Vec<u32> = inv.iter().map(|i| i.quantity).collect();
    assert!(q.windows(2).all(|w| w[0] <= w[1]));
    // equal quantities keep their relative order
    assert_eq!(names(&inv), vec!["Medkit", "Bandages", "Revolver ammo", "Rifle ammo", "Food", "Jerky"]);
}

#[test]
fn insertion_sorts_medicine_food_ammo() {
    let mut inv = mixed();
    inv.sort_by_priority_insertion();
    assert_eq!(names(&inv), vec!["Bandages", "Medkit", "Food", "Jerky", "Rifle ammo", "Revolver ammo"]);
}

#[test]
fn sorting_keeps_every_item() {
    let mut inv = mixed();
    let before = inv.total_quantity();
    inv.sort_by_type_bubble();
    inv.sort_by_quantity_selection();
    inv.sort_by_priority_insertion();
    assert_eq!(inv.len(), 6);
    assert_eq!(inv.total_quantity(), before);
}

// ── using items ───────────────────────────────────────────────────────────────

#[test]
fn food_goes_to_the_wagon() {
    let mut inv = Inventory::starter();
    let mut p = player();
    let mut c = Caravan::default();
    assert_eq!(inv.use_item("Food", &mut p, &mut c).unwrap(), UseOutcome::Ate { lbs: FOOD_UNIT_LBS });
    assert_eq!(c.food(), 10);
    assert_eq!(inv.linear_search_by_name("Food").map(|i| i.quantity), Some(9));
}

#[test]
fn medkit_refused_at_full_health() {
    let mut inv = Inventory::starter();
    let mut p = player();
    let mut c = Caravan::default();
    c.add_member(Member::new("Ana", 35).unwrap()).unwrap();
    assert!(matches!(inv.use_item("Medkit", &mut p, &mut c), Err(GameError::ItemNotUsable(_))));
    assert_eq!(inv.linear_search_by_name("Medkit").map(|i| i.quantity), Some(3));

    p.damage(2);
    assert_eq!(inv.use_item("medkit", &mut p, &mut c).unwrap(), UseOutcome::Healed);
    assert_eq!(p.health(), 2);
    assert_eq!(inv.linear_search_by_name("Medkit").map(|i| i.quantity), Some(2));
}

#[test]
fn ammo_box_empties_into_the_arsenal() {
    let mut inv = Inventory::starter();
    let mut p = player();
    let mut c = Caravan::default();
    let before = p.arsenal.ammo(Weapon::Revolver);
    let out = inv.use_item("Revolver ammo", &mut p, &mut c).unwrap();
    assert_eq!(out, UseOutcome::Loaded { weapon: Weapon::Revolver, rounds: 30 });
    assert_eq!(p.arsenal.ammo(Weapon::Revolver), before + 30);
    assert!(inv.linear_search_by_name("Revolver ammo").is_none());
}

#[test]
fn last_unit_removes_the_slot() {
    let mut inv = Inventory::default();
    inv.add(Item::food(1)).unwrap();
    let mut p = player();
    let mut c = Caravan::default();
    inv.use_item("Food", &mut p, &mut c).unwrap();
    assert!(inv.is_empty());
    assert!(matches!(inv.use_item("Food", &mut p, &mut c), Err(GameError::ItemNotFound(_))));
}
