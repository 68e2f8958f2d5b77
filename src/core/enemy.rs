//! Enemy roster and chase AI.
use rand::Rng;

use crate::core::grid::{GridPos, ObstacleMap, Scenario};
use crate::core::list::{Iter, IterMut, LinkedList};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EnemyState { Idle, Chasing, Attacking }

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind { Bandit, Wolf, Bear }

impl EnemyKind {
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => EnemyKind::Bandit,
            1 => EnemyKind::Wolf,
            _ => EnemyKind::Bear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnemyKind::Bandit => "armed bandit",
            EnemyKind::Wolf => "wolf",
            EnemyKind::Bear => "grizzly bear",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub pos: GridPos,
    pub kind: EnemyKind,
    pub state: EnemyState,
}

impl Enemy {
    pub fn new(id: u32, pos: GridPos, kind: EnemyKind) -> Self {
        Self { id, pos, kind, state: EnemyState::Idle }
    }

    pub fn is_chasing(&self) -> bool { matches!(self.state, EnemyState::Chasing | EnemyState::Attacking) }
}

/// Live enemies, in spawn order.
#[derive(Debug, Default)]
pub struct EnemyList {
    list: LinkedList<Enemy>,
}

impl EnemyList {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, enemy: Enemy) { self.list.push_back(enemy); }

    /// Removes the enemy with this id.
    pub fn delete(&mut self, id: u32) -> Option<Enemy> {
        self.list.remove_first(|e| e.id == id)
    }

    pub fn count(&self) -> usize { self.list.len() }
    pub fn is_empty(&self) -> bool { self.list.is_empty() }
    pub fn first(&self) -> Option<&Enemy> { self.list.first() }
    pub fn get(&self, id: u32) -> Option<&Enemy> { self.list.find(|e| e.id == id) }
    pub fn iter(&self) -> Iter<'_, Enemy> { self.list.iter() }
    pub fn iter_mut(&mut self) -> IterMut<'_, Enemy> { self.list.iter_mut() }
    pub fn clear(&mut self) { self.list.clear(); }

    pub fn enemy_at(&self, pos: GridPos) -> Option<&Enemy> {
        self.list.find(|e| e.pos == pos)
    }

    pub fn position_occupied(&self, pos: GridPos) -> bool { self.enemy_at(pos).is_some() }

    pub fn ids(&self) -> Vec<u32> { self.iter().map(|e| e.id).collect() }

    /// "wolf, bandit, ..." in list order; empty when there are no enemies.
    pub fn kinds_summary(&self) -> String {
        self.iter().map(|e| e.kind.label()).collect::<Vec<_>>().join(", ")
    }
}

/// Moves one enemy a single tile toward the player.
#[derive(Copy, Clone, Debug)]
pub struct EnemyAi {
    pub aggro_radius: i32,
}

impl Default for EnemyAi {
    fn default() -> Self { Self { aggro_radius: 8 } }
}

impl EnemyAi {
    /// `occupied` reports tiles held by *other* enemies.
    pub fn update(
        &self,
        enemy: &mut Enemy,
        player: GridPos,
        scenario: &Scenario,
        obstacles: &ObstacleMap,
        occupied: impl Fn(GridPos) -> bool,
    ) {
        if enemy.pos == player {
            enemy.state = EnemyState::Attacking;
            return;
        }
        match enemy.state {
            EnemyState::Idle => {
                if enemy.pos.chebyshev(player) <= self.aggro_radius {
                    enemy.state = EnemyState::Chasing;
                } else {
                    return;
                }
            }
            EnemyState::Attacking => enemy.state = EnemyState::Chasing,
            EnemyState::Chasing => {}
        }

        let free = |p: GridPos| scenario.in_bounds(p) && !obstacles.is_blocked_at(p) && !occupied(p);
        for next in Self::candidate_steps(enemy.pos, player) {
            if free(next) {
                enemy.pos = next;
                break;
            }
        }
        if enemy.pos == player {
            enemy.state = EnemyState::Attacking;
        }
    }

    /// Larger gap first, then the other axis.
    fn candidate_steps(from: GridPos, to: GridPos) -> Vec<GridPos> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let step_x = GridPos::new(from.x + dx.signum(), from.y);
        let step_y = GridPos::new(from.x, from.y + dy.signum());
        let mut steps = Vec::with_capacity(2);
        if dx.abs() >= dy.abs() {
            if dx != 0 { steps.push(step_x); }
            if dy != 0 { steps.push(step_y); }
        } else {
            if dy != 0 { steps.push(step_y); }
            if dx != 0 { steps.push(step_x); }
        }
        steps
    }
}
