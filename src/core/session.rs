//! Per-frame game loop over the whole model.
//!
//! The renderer and input layer stay outside: `main` turns raylib state into a
//! [`FrameInput`], calls [`Session::update`] once per frame, and reacts to the
//! returned [`GameEvent`]s (sounds, dialogue requests, screen changes).
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::core::achievements::{AchievementLog, AchievementTracker, JourneySnapshot};
use crate::core::combat::{Weapon, aim_at, cast_shot};
use crate::core::enemy::{EnemyAi, EnemyKind, EnemyList};
use crate::core::game::{GameContext, GameStatus, LossCause, START_POS};
use crate::core::grid::{GridPos, ObstacleMap, Scenario, ScenarioType, map_for};
use crate::core::inventory::Inventory;
use crate::core::movement::{self, HeldDirections};
use crate::core::player::Profession;
use crate::core::spawner::Spawner;
use crate::error::GameResult;

pub const HERO_FRAME_MS: u64 = 150;
pub const HERO_IDLE_FRAMES: usize = 4;
pub const HERO_RUN_FRAMES: usize = 6;

#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub held: HeldDirections,
    pub shooting: bool,
    pub switch_weapon: bool,
    /// Aim vector in tiles from the player's centre; `None` shoots where the player faces.
    pub aim: Option<(f64, f64)>,
    pub cycle_pace: bool,
    pub cycle_rations: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Moved,
    Shot(Weapon),
    DryFire(Weapon),
    WeaponSwitched(Weapon),
    EnemySpawned(u32),
    EnemyDefeated { id: u32, kind: EnemyKind, pos: GridPos },
    PlayerHit { health: u32 },
    DayPassed(u32),
    ScenarioChanged(ScenarioType),
    AchievementUnlocked(u8),
    Victory,
    GameOver(LossCause),
}

#[derive(Clone, Debug, Default)]
pub struct HeroAnimation {
    pub frame: usize,
    pub moving: bool,
    last_ms: u64,
}

impl HeroAnimation {
    pub fn frame_count(&self) -> usize {
        if self.moving { HERO_RUN_FRAMES } else { HERO_IDLE_FRAMES }
    }

    fn update(&mut self, now_ms: u64, moving: bool) {
        self.moving = moving;
        if now_ms.saturating_sub(self.last_ms) > HERO_FRAME_MS {
            self.frame = (self.frame + 1) % self.frame_count();
            self.last_ms = now_ms;
        }
    }

    /// Frame index valid for the current animation.
    pub fn current(&self) -> usize { self.frame % self.frame_count() }
}

/// Who set out, so a restart can set out again.
#[derive(Clone, Debug)]
struct Roster {
    name: String,
    profession: Profession,
    companions: Vec<(String, u32)>,
}

fn elapsed(now_ms: u64, since: Option<u64>, interval_ms: u64) -> bool {
    since.is_none_or(|t| now_ms.saturating_sub(t) >= interval_ms)
}

pub struct Session {
    config: Config,
    map_dir: PathBuf,
    roster: Roster,
    pub game: GameContext,
    pub scenario: Scenario,
    pub obstacles: ObstacleMap,
    pub enemies: EnemyList,
    pub spawner: Spawner,
    pub ai: EnemyAi,
    pub inventory: Inventory,
    pub achievements: AchievementLog,
    pub tracker: AchievementTracker,
    pub anim: HeroAnimation,
    rng: StdRng,
    last_move_ms: Option<u64>,
    last_shot_ms: Option<u64>,
    last_spawn_ms: Option<u64>,
    last_enemy_step_ms: Option<u64>,
    last_hit_ms: Option<u64>,
    day_started_ms: Option<u64>,
    finished: bool,
}

impl Session {
    pub fn new(
        config: Config,
        map_dir: impl Into<PathBuf>,
        name: &str,
        profession: Profession,
        companions: &[(&str, u32)],
    ) -> GameResult<Self> {
        Self::with_rng(config, map_dir, name, profession, companions, StdRng::from_entropy())
    }

    pub fn with_seed(
        config: Config,
        map_dir: impl Into<PathBuf>,
        name: &str,
        profession: Profession,
        companions: &[(&str, u32)],
        seed: u64,
    ) -> GameResult<Self> {
        Self::with_rng(config, map_dir, name, profession, companions, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: Config,
        map_dir: impl Into<PathBuf>,
        name: &str,
        profession: Profession,
        companions: &[(&str, u32)],
        rng: StdRng,
    ) -> GameResult<Self> {
        let game = GameContext::start(name, profession, companions)?;
        let map_dir = map_dir.into();
        let scenario = Scenario::new(config.board_width, config.board_height, game.scenario_type());
        let obstacles = ObstacleMap::load(&map_dir, &map_for(scenario.kind, &config.map_name));
        let spawner = Spawner::new(scenario.max_enemies(), config.safe_radius);
        let roster = Roster {
            name: name.to_string(),
            profession,
            companions: companions.iter().map(|(n, a)| (n.to_string(), *a)).collect(),
        };
        Ok(Self {
            config,
            map_dir,
            roster,
            game,
            scenario,
            obstacles,
            enemies: EnemyList::new(),
            spawner,
            ai: EnemyAi::default(),
            inventory: Inventory::starter(),
            achievements: AchievementLog::new(),
            tracker: AchievementTracker::default(),
            anim: HeroAnimation::default(),
            rng,
            last_move_ms: None,
            last_shot_ms: None,
            last_spawn_ms: None,
            last_enemy_step_ms: None,
            last_hit_ms: None,
            day_started_ms: None,
            finished: false,
        })
    }

    /// Same party, fresh trail.
    pub fn restart(&mut self) -> GameResult<()> {
        let companions: Vec<(&str, u32)> =
            self.roster.companions.iter().map(|(n, a)| (n.as_str(), *a)).collect();
        let rng = StdRng::from_entropy();
        let fresh = Self::with_rng(
            self.config.clone(),
            self.map_dir.clone(),
            &self.roster.name,
            self.roster.profession,
            &companions,
            rng,
        )?;
        *self = fresh;
        log::info!("Game restarted");
        Ok(())
    }

    pub fn config(&self) -> &Config { &self.config }
    pub fn is_finished(&self) -> bool { self.finished }

    pub fn update(&mut self, input: &FrameInput, now_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }
        if self.check_end(&mut events) {
            return events;
        }
        self.day_started_ms.get_or_insert(now_ms);

        if input.cycle_pace {
            self.game.caravan.pace = self.game.caravan.pace.next();
        }
        if input.cycle_rations {
            self.game.caravan.rations = self.game.caravan.rations.next();
        }
        if input.switch_weapon {
            events.push(GameEvent::WeaponSwitched(self.game.player.arsenal.switch_weapon()));
        }

        self.update_movement(input, now_ms, &mut events);
        self.update_shooting(input, now_ms, &mut events);
        self.update_spawns(now_ms, &mut events);
        self.update_enemies(now_ms);
        self.update_contact(now_ms, &mut events);
        self.update_day(now_ms, &mut events);
        self.update_achievements(&mut events);
        self.anim.update(now_ms, input.held.any());
        self.check_end(&mut events);
        events
    }

    fn update_movement(&mut self, input: &FrameInput, now_ms: u64, events: &mut Vec<GameEvent>) {
        if !input.held.any() {
            // la siguiente pulsación responde de inmediato
            self.last_move_ms = None;
            return;
        }
        if !elapsed(now_ms, self.last_move_ms, self.config.move_interval_ms) {
            return;
        }
        self.last_move_ms = Some(now_ms);
        let steps = movement::apply(&mut self.game.player, input.held, &self.scenario, &self.obstacles);
        for _ in 0..steps {
            self.tracker.record_step();
        }
        if steps > 0 {
            events.push(GameEvent::Moved);
        }
    }

    fn update_shooting(&mut self, input: &FrameInput, now_ms: u64, events: &mut Vec<GameEvent>) {
        let weapon = self.game.player.arsenal.selected;
        if !input.shooting || !elapsed(now_ms, self.last_shot_ms, weapon.cooldown_ms()) {
            return;
        }
        self.last_shot_ms = Some(now_ms);
        if !self.game.player.arsenal.shoot() {
            events.push(GameEvent::DryFire(weapon));
            return;
        }
        events.push(GameEvent::Shot(weapon));

        let player = &self.game.player;
        let angle = input.aim.map(|(dx, dy)| aim_at(dx, dy)).unwrap_or_else(|| player.facing.angle_deg());
        let hit = cast_shot(player.pos, angle, weapon.range(), &self.scenario, &self.obstacles, &self.enemies);
        if let Some(hit) = hit {
            if let Some(enemy) = self.enemies.delete(hit.enemy_id) {
                log::debug!("Defeated {} #{} at {:.1} tiles", enemy.kind.label(), enemy.id, hit.distance);
                self.tracker.record_kill(weapon == Weapon::Rifle, hit.distance);
                events.push(GameEvent::EnemyDefeated { id: enemy.id, kind: enemy.kind, pos: enemy.pos });
            }
        }
    }

    fn update_spawns(&mut self, now_ms: u64, events: &mut Vec<GameEvent>) {
        if !elapsed(now_ms, self.last_spawn_ms, self.config.spawn_interval_ms) {
            return;
        }
        self.last_spawn_ms = Some(now_ms);
        let spawned = self.spawner.tick_spawn(
            &self.scenario,
            self.game.player.pos,
            &self.obstacles,
            &mut self.enemies,
            &mut self.rng,
        );
        if let Some(id) = spawned {
            events.push(GameEvent::EnemySpawned(id));
        }
    }

    fn update_enemies(&mut self, now_ms: u64) {
        if !elapsed(now_ms, self.last_enemy_step_ms, self.config.enemy_step_ms) {
            return;
        }
        self.last_enemy_step_ms = Some(now_ms);
        let player = self.game.player.pos;
        let mut positions: Vec<(u32, GridPos)> = self.enemies.iter().map(|e| (e.id, e.pos)).collect();
        for (idx, enemy) in self.enemies.iter_mut().enumerate() {
            let id = enemy.id;
            self.ai.update(enemy, player, &self.scenario, &self.obstacles, |p| {
                positions.iter().any(|&(other, pos)| other != id && pos == p)
            });
            positions[idx].1 = enemy.pos;
        }
    }

    fn update_contact(&mut self, now_ms: u64, events: &mut Vec<GameEvent>) {
        if !self.enemies.position_occupied(self.game.player.pos) {
            return;
        }
        if !elapsed(now_ms, self.last_hit_ms, self.config.hit_cooldown_ms) {
            return;
        }
        self.last_hit_ms = Some(now_ms);
        self.game.player.damage(1);
        self.tracker.record_damage();
        events.push(GameEvent::PlayerHit { health: self.game.player.health() });
    }

    fn update_day(&mut self, now_ms: u64, events: &mut Vec<GameEvent>) {
        let day_ms = (self.config.day_length_secs.max(0.0) * 1000.0) as u64;
        let Some(started) = self.day_started_ms else { return };
        if now_ms.saturating_sub(started) < day_ms.max(1) {
            return;
        }
        self.day_started_ms = Some(now_ms);
        let miles = self.game.caravan.pace.miles_per_day();
        self.game.advance_day(miles);
        events.push(GameEvent::DayPassed(self.game.day()));

        let kind = self.game.scenario_type();
        if kind != self.scenario.kind {
            self.enter_scenario(kind);
            events.push(GameEvent::ScenarioChanged(kind));
        }
    }

    fn enter_scenario(&mut self, kind: ScenarioType) {
        self.tracker.record_region_left(self.game.caravan.food());
        self.scenario = Scenario::new(self.config.board_width, self.config.board_height, kind);
        self.obstacles = ObstacleMap::load(&self.map_dir, &map_for(kind, &self.config.map_name));
        self.enemies.clear();
        let pos = self.game.player.pos;
        if movement::cell_solid(&self.scenario, &self.obstacles, pos) {
            self.game.player.pos = START_POS;
        }
        log::info!("Entering {} on day {}", kind.label(), self.game.day());
    }

    fn update_achievements(&mut self, events: &mut Vec<GameEvent>) {
        let snapshot = self.snapshot();
        for d in self.tracker.evaluate(&snapshot, &mut self.achievements) {
            events.push(GameEvent::AchievementUnlocked(d));
        }
    }

    pub fn snapshot(&self) -> JourneySnapshot {
        let caravan = &self.game.caravan;
        JourneySnapshot {
            days: self.game.day(),
            distance: self.game.distance(),
            food: caravan.food(),
            members_total: caravan.total_members(),
            members_alive: caravan.alive_count(),
            reached_oregon: self.game.won(),
        }
    }

    /// Ends the session on death or arrival. `true` once it is over.
    fn check_end(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if !self.game.player.is_alive() && self.game.status() == GameStatus::InProgress {
            self.game.end(false);
        }
        match self.game.status() {
            GameStatus::Won => {
                self.update_achievements(events);
                events.push(GameEvent::Victory);
                log::info!("Victory after {} days", self.game.day());
            }
            GameStatus::Lost => {
                let cause = self.game.loss_cause();
                events.push(GameEvent::GameOver(cause));
                log::info!("Game over: {}", cause.describe());
            }
            GameStatus::InProgress | GameStatus::NotStarted => return false,
        }
        self.finished = true;
        true
    }
}
