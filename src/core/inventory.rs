//! Player inventory backed by the singly linked list.
use std::fmt;

use crate::core::caravan::Caravan;
use crate::core::combat::Weapon;
use crate::core::list::{Iter, LinkedList};
use crate::core::player::Player;
use crate::core::sort::{bubble_sort_by, insertion_sort_by, selection_sort_by};
use crate::error::{GameError, GameResult};

pub const DEFAULT_CAPACITY: usize = 20;
/// Pounds of caravan food per food unit.
pub const FOOD_UNIT_LBS: u32 = 10;
const MEDKIT_MEMBER_HEAL: u32 = 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Food,
    Medicine,
    Ammo(Weapon),
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Medicine => "Medicine",
            Category::Ammo(_) => "Ammo",
        }
    }

    /// Lower sorts first: medicine, food, ammo.
    pub fn priority(self) -> u8 {
        match self {
            Category::Medicine => 0,
            Category::Food => 1,
            Category::Ammo(_) => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub description: String,
}

impl Item {
    pub fn new(name: &str, category: Category, quantity: u32, description: &str) -> Self {
        Self { name: name.to_string(), category, quantity, description: description.to_string() }
    }

    pub fn food(quantity: u32) -> Self {
        Self::new("Food", Category::Food, quantity, "Dried meat and flour, 10 lbs per ration")
    }

    pub fn medkit(quantity: u32) -> Self {
        Self::new("Medkit", Category::Medicine, quantity, "Restores health")
    }

    pub fn ammo(weapon: Weapon, quantity: u32) -> Self {
        let name = format!("{} ammo", weapon.label());
        Self::new(&name, Category::Ammo(weapon), quantity, "Rounds for your weapon")
    }

    fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{} ({}) - {}", self.name, self.quantity, self.category.label(), self.description)
    }
}

/// What using an item did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UseOutcome {
    Ate { lbs: u32 },
    Healed,
    Loaded { weapon: Weapon, rounds: u32 },
}

impl fmt::Display for UseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseOutcome::Ate { lbs } => write!(f, "Added {lbs} lbs of food to the wagon"),
            UseOutcome::Healed => write!(f, "Patched up the party"),
            UseOutcome::Loaded { weapon, rounds } => write!(f, "Loaded {rounds} rounds into the {}", weapon.label()),
        }
    }
}

#[derive(Debug)]
pub struct Inventory {
    items: LinkedList<Item>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self { Self::new(DEFAULT_CAPACITY) }
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self { items: LinkedList::new(), capacity }
    }

    /// 10 food, 3 medkits and a box for each gun.
    pub fn starter() -> Self {
        let mut inv = Self::default();
        for item in [Item::food(10), Item::medkit(3), Item::ammo(Weapon::Rifle, 50), Item::ammo(Weapon::Revolver, 30)] {
            inv.items.push_back(item);
        }
        inv
    }

    pub fn capacity(&self) -> usize { self.capacity }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn is_full(&self) -> bool { self.items.len() >= self.capacity }
    pub fn iter(&self) -> Iter<'_, Item> { self.items.iter() }

    pub fn total_quantity(&self) -> u32 { self.items.iter().map(|i| i.quantity).sum() }

    /// Stacks onto an item with the same name, otherwise takes a new slot.
    /// A name already stored under another category is refused.
    pub fn add(&mut self, item: Item) -> GameResult<()> {
        if let Some(existing) = self.items.find_mut(|i| i.name_matches(&item.name)) {
            if existing.category != item.category {
                return Err(GameError::CategoryMismatch { name: existing.name.clone(), category: existing.category.label() });
            }
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            return Ok(());
        }
        if self.is_full() {
            return Err(GameError::InventoryFull { capacity: self.capacity });
        }
        self.items.push_back(item);
        Ok(())
    }

    /// True if `add` would succeed for an item with this name.
    pub fn has_room_for(&self, name: &str) -> bool {
        self.can_stack(name) || !self.is_full()
    }

    fn can_stack(&self, name: &str) -> bool {
        self.linear_search_by_name(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> GameResult<Item> {
        self.items
            .remove_first(|i| i.name_matches(name))
            .ok_or_else(|| GameError::ItemNotFound(name.to_string()))
    }

    /// Case-insensitive, O(n).
    pub fn linear_search_by_name(&self, name: &str) -> Option<&Item> {
        self.items.find(|i| i.name_matches(name))
    }

    /// Category label, A-Z.
    pub fn sort_by_type_bubble(&mut self) {
        self.items.reorder(|s| bubble_sort_by(s, |a, b| a.category.label().cmp(b.category.label())));
    }

    /// Quantity, smallest first.
    pub fn sort_by_quantity_selection(&mut self) {
        self.items.reorder(|s| selection_sort_by(s, |a, b| a.quantity.cmp(&b.quantity)));
    }

    /// Medicine, then food, then ammo.
    pub fn sort_by_priority_insertion(&mut self) {
        self.items.reorder(|s| insertion_sort_by(s, |a, b| a.category.priority().cmp(&b.category.priority())));
    }

    /// Food and medicine spend one unit; ammo moves the whole stack into the arsenal.
    pub fn use_item(&mut self, name: &str, player: &mut Player, caravan: &mut Caravan) -> GameResult<UseOutcome> {
        let item = self
            .items
            .find_mut(|i| i.name_matches(name))
            .ok_or_else(|| GameError::ItemNotFound(name.to_string()))?;
        if item.quantity == 0 {
            return Err(GameError::ItemNotUsable(item.name.clone()));
        }
        let outcome = match item.category {
            Category::Food => {
                item.quantity -= 1;
                caravan.add_food(FOOD_UNIT_LBS);
                UseOutcome::Ate { lbs: FOOD_UNIT_LBS }
            }
            Category::Medicine => {
                if player.is_full_health() {
                    return Err(GameError::ItemNotUsable(item.name.clone()));
                }
                item.quantity -= 1;
                player.heal(1);
                caravan.heal_all(MEDKIT_MEMBER_HEAL);
                UseOutcome::Healed
            }
            Category::Ammo(weapon) => {
                let rounds = std::mem::take(&mut item.quantity);
                player.arsenal.add_ammo(weapon, rounds);
                UseOutcome::Loaded { weapon, rounds }
            }
        };
        let emptied = item.quantity == 0;
        if emptied {
            let _ = self.remove(name);
        }
        Ok(outcome)
    }

    pub fn summary(&self) -> String {
        format!("Items: {}/{}", self.len(), self.capacity)
    }
}
