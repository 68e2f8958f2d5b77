//! Player data and defaults.
use crate::core::combat::Arsenal;
use crate::core::grid::{Direction, GridPos};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Profession { Banker, Carpenter, Farmer }

impl Profession {
    pub const ALL: [Profession; 3] = [Profession::Banker, Profession::Carpenter, Profession::Farmer];

    pub fn starting_money(self) -> u32 {
        match self {
            Profession::Banker => 1600,
            Profession::Carpenter => 800,
            Profession::Farmer => 400,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Profession::Banker => "Banker",
            Profession::Carpenter => "Carpenter",
            Profession::Farmer => "Farmer",
        }
    }
}

impl Default for Profession {
    fn default() -> Self { Profession::Carpenter }
}

pub const DEFAULT_HEALTH: u32 = 3;

#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub profession: Profession,
    pub pos: GridPos,
    pub facing: Direction,
    health: u32,
    max_health: u32,
    money: u32,
    pub arsenal: Arsenal,
}

impl Player {
    pub fn new(name: &str, profession: Profession, pos: GridPos) -> Self {
        Self {
            name: name.to_string(),
            profession,
            pos,
            facing: Direction::Right,
            health: DEFAULT_HEALTH,
            max_health: DEFAULT_HEALTH,
            money: profession.starting_money(),
            arsenal: Arsenal::default(),
        }
    }

    pub fn set_position(&mut self, x: i32, y: i32) { self.pos = GridPos::new(x, y); }

    pub fn health(&self) -> u32 { self.health }
    pub fn max_health(&self) -> u32 { self.max_health }
    pub fn is_alive(&self) -> bool { self.health > 0 }
    pub fn is_full_health(&self) -> bool { self.health >= self.max_health }

    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn money(&self) -> u32 { self.money }

    pub fn add_money(&mut self, amount: u32) { self.money = self.money.saturating_add(amount); }

    pub fn can_afford(&self, amount: u32) -> bool { self.money >= amount }

    /// Returns `false` (and spends nothing) when the player can't pay.
    pub fn spend_money(&mut self, amount: u32) -> bool {
        if amount == 0 || amount > self.money {
            return false;
        }
        self.money -= amount;
        true
    }

    /// Rounds loaded for the weapon in hand.
    pub fn current_ammo(&self) -> u32 { self.arsenal.current_ammo() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_money_by_profession() {
        assert_eq!(Player::new("a", Profession::Banker, GridPos::default()).money(), 1600);
        assert_eq!(Player::new("a", Profession::default(), GridPos::default()).money(), 800);
        assert_eq!(Player::new("a", Profession::Farmer, GridPos::default()).money(), 400);
    }

    #[test]
    fn health_is_clamped() {
        let mut p = Player::new("a", Profession::Farmer, GridPos::default());
        p.damage(10);
        assert_eq!(p.health(), 0);
        assert!(!p.is_alive());
        p.heal(10);
        assert_eq!(p.health(), DEFAULT_HEALTH);
    }

    #[test]
    fn spending_more_than_owned_fails() {
        let mut p = Player::new("a", Profession::Farmer, GridPos::default());
        assert!(!p.spend_money(401));
        assert!(!p.spend_money(0));
        assert!(p.spend_money(400));
        assert_eq!(p.money(), 0);
    }
}
