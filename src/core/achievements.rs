//! Achievement catalog, the player's unlocked set, and the tracker that
//! decides when gameplay earns one.
use std::fmt;

use crate::core::tree::OrderedTree;
use crate::error::{GameError, GameResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    /// Also the sort key, 1 (easy) to 10 (extreme).
    pub difficulty: u8,
    pub title: &'static str,
    pub description: &'static str,
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.difficulty, self.title, self.description)
    }
}

pub const FIRST_STEP: u8 = 1;
pub const NOVICE_EXPLORER: u8 = 2;
pub const CROSSING_THE_PLAINS: u8 = 3;
pub const FIRST_BLOOD: u8 = 4;
pub const SHARPSHOOTER: u8 = 5;
pub const RIFLE_MASTER: u8 = 6;
pub const SURVIVOR: u8 = 7;
pub const RESOURCE_MANAGER: u8 = 8;
pub const OREGON_CONQUEROR: u8 = 9;
pub const TRAIL_LEGEND: u8 = 10;

const fn ach(difficulty: u8, title: &'static str, description: &'static str) -> Achievement {
    Achievement { difficulty, title, description }
}

/// Listed in the order they go into the catalog tree; the mix keeps it from
/// degenerating into a list.
pub const CATALOG: [Achievement; 10] = [
    ach(SHARPSHOOTER, "Sharpshooter", "Defeat 10 enemies without taking damage"),
    ach(FIRST_BLOOD, "First Blood", "Defeat your first enemy"),
    ach(CROSSING_THE_PLAINS, "Crossing the Plains", "Leave the plains behind"),
    ach(NOVICE_EXPLORER, "Novice Explorer", "Travel 100 miles of the trail"),
    ach(FIRST_STEP, "First Step", "Take your first step on the Oregon Trail"),
    ach(RIFLE_MASTER, "Rifle Master", "Defeat 5 enemies with the rifle from 5 or more tiles away"),
    ach(SURVIVOR, "Survivor", "Keep every caravan member alive for 50 days"),
    ach(RESOURCE_MANAGER, "Resource Manager", "Leave a region with more than 500 lbs of food"),
    ach(OREGON_CONQUEROR, "Oregon Conqueror", "Reach Oregon"),
    ach(TRAIL_LEGEND, "Trail Legend", "Reach Oregon without losing a single caravan member"),
];

pub struct AchievementLog {
    catalog: OrderedTree<u8, Achievement>,
    unlocked: OrderedTree<u8, Achievement>,
}

impl Default for AchievementLog {
    fn default() -> Self { Self::new() }
}

impl AchievementLog {
    pub fn new() -> Self {
        let mut catalog = OrderedTree::new();
        for a in CATALOG.iter().cloned() {
            catalog.insert(a.difficulty, a);
        }
        Self { catalog, unlocked: OrderedTree::new() }
    }

    /// `Ok(false)` when it was already unlocked.
    pub fn unlock(&mut self, difficulty: u8) -> GameResult<bool> {
        let achievement = self
            .catalog
            .get(&difficulty)
            .cloned()
            .ok_or(GameError::UnknownAchievement(difficulty))?;
        let fresh = self.unlocked.insert(difficulty, achievement);
        if fresh {
            log::info!("Achievement unlocked: #{difficulty}");
        }
        Ok(fresh)
    }

    pub fn has(&self, difficulty: u8) -> bool { self.unlocked.contains(&difficulty) }

    pub fn get(&self, difficulty: u8) -> Option<&Achievement> { self.catalog.get(&difficulty) }

    pub fn unlocked_in_order(&self) -> impl Iterator<Item = &Achievement> + '_ {
        self.unlocked.values()
    }

    pub fn catalog_in_order(&self) -> impl Iterator<Item = &Achievement> + '_ {
        self.catalog.values()
    }

    pub fn catalog_tree(&self) -> &OrderedTree<u8, Achievement> { &self.catalog }
    pub fn unlocked_tree(&self) -> &OrderedTree<u8, Achievement> { &self.unlocked }

    /// (unlocked, total, percent)
    pub fn progress(&self) -> (usize, usize, f64) {
        let done = self.unlocked.len();
        let total = self.catalog.len();
        let pct = if total > 0 { done as f64 * 100.0 / total as f64 } else { 0.0 };
        (done, total, pct)
    }

    pub fn unlocked_report(&self) -> String {
        if self.unlocked.is_empty() {
            return "No achievements unlocked yet. Explore the trail to earn them!".to_string();
        }
        self.unlocked_in_order().map(|a| a.to_string()).collect::<Vec<_>>().join("\n")
    }

    pub fn catalog_report(&self) -> String {
        self.catalog_in_order().map(|a| a.to_string()).collect::<Vec<_>>().join("\n")
    }
}

/// What the tracker needs to know about the journey each frame.
#[derive(Copy, Clone, Debug, Default)]
pub struct JourneySnapshot {
    pub days: u32,
    pub distance: u32,
    pub food: u32,
    pub members_total: usize,
    pub members_alive: usize,
    pub reached_oregon: bool,
}

/// Gameplay counters that feed the achievement conditions.
#[derive(Clone, Debug, Default)]
pub struct AchievementTracker {
    pub steps: u32,
    pub kills: u32,
    pub kills_since_damage: u32,
    pub long_rifle_kills: u32,
    pub regions_left: u32,
    /// Set when a region was left while carrying more than 500 lbs of food.
    pub left_region_well_fed: bool,
}

impl AchievementTracker {
    pub fn record_step(&mut self) { self.steps += 1; }

    pub fn record_kill(&mut self, rifle: bool, distance: f64) {
        self.kills += 1;
        self.kills_since_damage += 1;
        if rifle && distance >= 5.0 {
            self.long_rifle_kills += 1;
        }
    }

    pub fn record_damage(&mut self) { self.kills_since_damage = 0; }

    pub fn record_region_left(&mut self, food: u32) {
        self.regions_left += 1;
        if food > 500 {
            self.left_region_well_fed = true;
        }
    }

    /// Difficulties whose condition currently holds.
    pub fn qualifying(&self, j: &JourneySnapshot) -> Vec<u8> {
        let no_losses = j.members_total > 0 && j.members_alive == j.members_total;
        let checks = [
            (FIRST_STEP, self.steps >= 1),
            (NOVICE_EXPLORER, j.distance >= 100),
            (CROSSING_THE_PLAINS, self.regions_left >= 1),
            (FIRST_BLOOD, self.kills >= 1),
            (SHARPSHOOTER, self.kills_since_damage >= 10),
            (RIFLE_MASTER, self.long_rifle_kills >= 5),
            (SURVIVOR, j.days >= 50 && no_losses),
            (RESOURCE_MANAGER, self.left_region_well_fed),
            (OREGON_CONQUEROR, j.reached_oregon),
            (TRAIL_LEGEND, j.reached_oregon && no_losses),
        ];
        checks.iter().filter(|(_, ok)| *ok).map(|(d, _)| *d).collect()
    }

    /// Unlocks everything that qualifies and returns only the new ones.
    pub fn evaluate(&self, journey: &JourneySnapshot, log: &mut AchievementLog) -> Vec<u8> {
        self.qualifying(journey)
            .into_iter()
            .filter(|&d| matches!(log.unlock(d), Ok(true)))
            .collect()
    }
}
