//! The caravan: companions, food, pace and rations.
use std::fmt;

use crate::error::{GameError, GameResult};

pub const MAX_MEMBERS: usize = 5;
pub const MAX_MEMBER_HEALTH: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    name: String,
    age: u32,
    health: u32,
    alive: bool,
}

impl Member {
    pub fn new(name: &str, age: u32) -> GameResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidMember("name cannot be empty".to_string()));
        }
        Ok(Self { name: name.to_string(), age, health: MAX_MEMBER_HEALTH, alive: true })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn age(&self) -> u32 { self.age }
    pub fn health(&self) -> u32 { self.health }
    pub fn is_alive(&self) -> bool { self.alive }

    pub fn damage(&mut self, amount: u32) {
        if !self.alive || amount == 0 {
            return;
        }
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.die();
        }
    }

    pub fn heal(&mut self, amount: u32) {
        if self.alive {
            self.health = (self.health + amount).min(MAX_MEMBER_HEALTH);
        }
    }

    pub fn die(&mut self) {
        self.alive = false;
        self.health = 0;
    }

    pub fn condition(&self) -> &'static str {
        match (self.alive, self.health) {
            (false, _) => "Deceased",
            (true, 80..) => "Excellent",
            (true, 60..) => "Good",
            (true, 40..) => "Fair",
            (true, 20..) => "Weak",
            _ => "Critical",
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} yrs) - health {}% - {}", self.name, self.age, self.health, self.condition())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pace { Steady, Moderate, Resting }

impl Pace {
    pub fn miles_per_day(self) -> u32 {
        match self {
            Pace::Steady => 20,
            Pace::Moderate => 15,
            Pace::Resting => 10,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Pace::Steady => Pace::Moderate,
            Pace::Moderate => Pace::Resting,
            Pace::Resting => Pace::Steady,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pace::Steady => "Steady",
            Pace::Moderate => "Moderate",
            Pace::Resting => "Resting",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rations { Meager, Moderate, Filling }

impl Rations {
    /// Pounds per living member per day.
    pub fn per_person(self) -> u32 {
        match self {
            Rations::Meager => 2,
            Rations::Moderate => 3,
            Rations::Filling => 5,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Rations::Meager => Rations::Moderate,
            Rations::Moderate => Rations::Filling,
            Rations::Filling => Rations::Meager,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rations::Meager => "Meager",
            Rations::Moderate => "Moderate",
            Rations::Filling => "Filling",
        }
    }
}

const RESTING_HEAL: u32 = 3;
const STARVATION_DAMAGE_PER_LB: u32 = 2;

#[derive(Clone, Debug)]
pub struct Caravan {
    members: Vec<Member>,
    food: u32,
    pub pace: Pace,
    pub rations: Rations,
}

impl Default for Caravan {
    fn default() -> Self { Self::new(0) }
}

impl Caravan {
    pub fn new(food: u32) -> Self {
        Self { members: Vec::new(), food, pace: Pace::Moderate, rations: Rations::Moderate }
    }

    pub fn add_member(&mut self, member: Member) -> GameResult<()> {
        if self.members.len() >= MAX_MEMBERS {
            return Err(GameError::CaravanFull(MAX_MEMBERS));
        }
        self.members.push(member);
        Ok(())
    }

    pub fn members(&self) -> &[Member] { &self.members }
    pub fn leader(&self) -> Option<&Member> { self.members.first() }
    pub fn total_members(&self) -> usize { self.members.len() }
    pub fn alive_count(&self) -> usize { self.members.iter().filter(|m| m.is_alive()).count() }
    pub fn all_dead(&self) -> bool { self.alive_count() == 0 }

    pub fn food(&self) -> u32 { self.food }
    pub fn has_food(&self) -> bool { self.food > 0 }
    pub fn add_food(&mut self, lbs: u32) { self.food = self.food.saturating_add(lbs); }

    pub fn heal_all(&mut self, amount: u32) {
        for m in self.members.iter_mut() {
            m.heal(amount);
        }
    }

    /// Eats one day of rations. A shortfall hurts everyone still alive.
    /// Returns the pounds actually eaten.
    pub fn consume_food(&mut self) -> u32 {
        let alive = self.alive_count() as u32;
        if alive == 0 {
            return 0;
        }
        let needed = self.rations.per_person() * alive;
        let eaten = needed.min(self.food);
        self.food -= eaten;
        if eaten < needed {
            let deficit = needed - eaten;
            for m in self.members.iter_mut().filter(|m| m.is_alive()) {
                m.damage(deficit * STARVATION_DAMAGE_PER_LB);
            }
        }
        eaten
    }

    /// End-of-day upkeep besides food.
    pub fn rest(&mut self) {
        if self.pace == Pace::Resting {
            self.heal_all(RESTING_HEAL);
        }
    }

    pub fn status(&self) -> String {
        let mut s = String::from("=== Caravan ===\n");
        s.push_str(&format!("Alive: {}/{}\n", self.alive_count(), self.total_members()));
        s.push_str(&format!("Food: {} lbs\n", self.food));
        s.push_str(&format!("Pace: {}\n", self.pace.label()));
        s.push_str(&format!("Rations: {}\n", self.rations.label()));
        for m in &self.members {
            s.push_str(&format!("  - {m}\n"));
        }
        s
    }
}
