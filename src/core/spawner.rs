//! Random enemy placement.
use rand::Rng;

use crate::core::enemy::{Enemy, EnemyKind, EnemyList};
use crate::core::grid::{GridPos, ObstacleMap, Scenario};

const SPAWN_ATTEMPTS: usize = 30;

#[derive(Debug)]
pub struct Spawner {
    pub max_density: usize,
    pub safe_radius: i32,
    next_id: u32,
}

impl Spawner {
    pub fn new(max_density: usize, safe_radius: i32) -> Self {
        Self { max_density, safe_radius, next_id: 1 }
    }

    /// Places at most one enemy. Returns the new enemy's id.
    pub fn tick_spawn(
        &mut self,
        scenario: &Scenario,
        player: GridPos,
        obstacles: &ObstacleMap,
        enemies: &mut EnemyList,
        rng: &mut impl Rng,
    ) -> Option<u32> {
        self.max_density = scenario.max_enemies();
        if enemies.count() >= self.max_density {
            return None;
        }
        let pos = self.find_valid_position(scenario, player, obstacles, enemies, rng)?;
        let id = self.next_id;
        self.next_id += 1;
        let kind = EnemyKind::random(rng);
        log::debug!("Spawned {} #{id} at ({}, {})", kind.label(), pos.x, pos.y);
        enemies.add(Enemy::new(id, pos, kind));
        Some(id)
    }

    fn find_valid_position(
        &self,
        scenario: &Scenario,
        player: GridPos,
        obstacles: &ObstacleMap,
        enemies: &EnemyList,
        rng: &mut impl Rng,
    ) -> Option<GridPos> {
        for _ in 0..SPAWN_ATTEMPTS {
            let p = GridPos::new(rng.gen_range(0..scenario.width), rng.gen_range(0..scenario.height));
            if !self.is_outside_safe_radius(p, player) {
                continue;
            }
            if obstacles.is_blocked_at(p) || enemies.position_occupied(p) {
                continue;
            }
            return Some(p);
        }
        None
    }

    pub fn is_outside_safe_radius(&self, p: GridPos, player: GridPos) -> bool {
        p.distance(player) >= self.safe_radius as f64
    }
}
