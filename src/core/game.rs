//! Journey state: player, caravan, days and miles.
use crate::core::caravan::{Caravan, Member};
use crate::core::grid::{GridPos, ScenarioType};
use crate::core::player::{Player, Profession};
use crate::error::GameResult;

/// Miles from Independence to Oregon.
pub const TOTAL_DISTANCE: u32 = 2000;
pub const START_POS: GridPos = GridPos::new(5, 5);
const LEADER_AGE: u32 = 35;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus { NotStarted, InProgress, Won, Lost }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LossCause { CaravanPerished, LeaderDied, JourneyIncomplete }

impl LossCause {
    pub fn describe(self) -> &'static str {
        match self {
            LossCause::CaravanPerished => "Every member of the caravan has died",
            LossCause::LeaderDied => "The caravan leader has died",
            LossCause::JourneyIncomplete => "The journey could not be completed",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameContext {
    pub player: Player,
    pub caravan: Caravan,
    day: u32,
    distance: u32,
    status: GameStatus,
}

impl Default for GameContext {
    fn default() -> Self {
        Self {
            player: Player::new("Traveler", Profession::default(), START_POS),
            caravan: Caravan::default(),
            day: 0,
            distance: 0,
            status: GameStatus::NotStarted,
        }
    }
}

impl GameContext {
    /// Fresh journey. Blank companion names are skipped.
    pub fn start(name: &str, profession: Profession, companions: &[(&str, u32)]) -> GameResult<Self> {
        let player = Player::new(name, profession, START_POS);
        let mut caravan = Caravan::default();
        caravan.add_member(Member::new(name, LEADER_AGE)?)?;
        for (companion, age) in companions.iter().filter(|(n, _)| !n.trim().is_empty()) {
            caravan.add_member(Member::new(companion, *age)?)?;
        }
        log::info!(
            "New journey: {} the {} with {} companions, ${}",
            player.name,
            profession.label(),
            caravan.total_members() - 1,
            player.money()
        );
        Ok(Self { player, caravan, day: 0, distance: 0, status: GameStatus::InProgress })
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    pub fn day(&self) -> u32 { self.day }
    pub fn distance(&self) -> u32 { self.distance }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn in_progress(&self) -> bool { self.status == GameStatus::InProgress }
    pub fn won(&self) -> bool { self.status == GameStatus::Won }

    pub fn remaining_distance(&self) -> u32 { TOTAL_DISTANCE.saturating_sub(self.distance) }

    pub fn progress_percent(&self) -> f64 {
        self.distance as f64 * 100.0 / TOTAL_DISTANCE as f64
    }

    pub fn scenario_type(&self) -> ScenarioType {
        ScenarioType::for_progress(self.distance, TOTAL_DISTANCE)
    }

    /// One day on the trail: food, rest, then win/loss checks.
    pub fn advance_day(&mut self, miles: u32) {
        if !self.in_progress() {
            return;
        }
        self.day += 1;
        self.distance = self.distance.saturating_add(miles);
        self.caravan.consume_food();
        self.caravan.rest();
        if self.distance >= TOTAL_DISTANCE {
            self.status = GameStatus::Won;
            log::info!("Reached Oregon on day {}", self.day);
        }
        if self.caravan.all_dead() {
            self.status = GameStatus::Lost;
            log::info!("The whole caravan perished on day {}", self.day);
        }
    }

    pub fn end(&mut self, won: bool) {
        self.status = if won { GameStatus::Won } else { GameStatus::Lost };
    }

    pub fn loss_cause(&self) -> LossCause {
        if self.caravan.total_members() > 0 && self.caravan.all_dead() {
            LossCause::CaravanPerished
        } else if !self.player.is_alive() {
            LossCause::LeaderDied
        } else {
            LossCause::JourneyIncomplete
        }
    }

    pub fn summary(&self) -> String {
        if self.status == GameStatus::NotStarted {
            return "Game not started".to_string();
        }
        let mut s = String::from("=== Oregon Trail ===\n");
        s.push_str(&format!("Player: {} ({})\n", self.player.name, self.player.profession.label()));
        s.push_str(&format!("Day: {}\n", self.day));
        s.push_str(&format!(
            "Distance: {}/{} miles ({:.1}%)\n",
            self.distance,
            TOTAL_DISTANCE,
            self.progress_percent()
        ));
        s.push_str(&format!("Money: ${}\n", self.player.money()));
        s.push_str(&format!("Members alive: {}\n", self.caravan.alive_count()));
        s.push_str(&format!("Food: {} lbs\n", self.caravan.food()));
        match self.status {
            GameStatus::Won => s.push_str("\nVICTORY! You made it to Oregon.\n"),
            GameStatus::Lost if self.caravan.all_dead() => s.push_str("\nGame over: every member has died.\n"),
            _ => {}
        }
        s
    }

    pub fn final_report(&self) -> String {
        format!(
            "=== FINAL REPORT ===\n\nDays on the trail: {}\nDistance travelled: {} miles\nSurvivors: {}\nMoney left: ${}\nFood left: {} lbs\n",
            self.day,
            self.distance,
            self.caravan.alive_count(),
            self.player.money(),
            self.caravan.food()
        )
    }
}
