//! General store at Independence.
use crate::core::combat::Weapon;
use crate::core::inventory::{Inventory, Item};
use crate::core::player::Player;
use crate::error::{GameError, GameResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Offer { FoodPack, Medkit, RifleAmmo, RevolverAmmo }

impl Offer {
    pub const ALL: [Offer; 4] = [Offer::FoodPack, Offer::Medkit, Offer::RifleAmmo, Offer::RevolverAmmo];

    pub fn price(self) -> u32 {
        match self {
            Offer::FoodPack => 5,
            Offer::Medkit => 15,
            Offer::RifleAmmo => 10,
            Offer::RevolverAmmo => 8,
        }
    }

    pub fn item(self) -> Item {
        match self {
            Offer::FoodPack => Item::food(1),
            Offer::Medkit => Item::medkit(1),
            Offer::RifleAmmo => Item::ammo(Weapon::Rifle, 20),
            Offer::RevolverAmmo => Item::ammo(Weapon::Revolver, 12),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Offer::FoodPack => "Food pack (10 lbs)",
            Offer::Medkit => "Medkit",
            Offer::RifleAmmo => "Rifle ammo (20)",
            Offer::RevolverAmmo => "Revolver ammo (12)",
        }
    }
}

/// Nothing is charged unless the goods fit.
pub fn buy(offer: Offer, player: &mut Player, inventory: &mut Inventory) -> GameResult<()> {
    let price = offer.price();
    if !player.can_afford(price) {
        return Err(GameError::InsufficientFunds { needed: price, available: player.money() });
    }
    let item = offer.item();
    if !inventory.has_room_for(&item.name) {
        return Err(GameError::InventoryFull { capacity: inventory.capacity() });
    }
    inventory.add(item)?;
    player.spend_money(price);
    log::debug!("Bought {} for ${price}", offer.label());
    Ok(())
}
