//! Grid-bounded single-step movement.
use crate::core::grid::{Direction, GridPos, ObstacleMap, Scenario};
use crate::core::player::Player;

/// Board edges and obstacles are solid.
pub fn cell_solid(scenario: &Scenario, obstacles: &ObstacleMap, p: GridPos) -> bool {
    !scenario.in_bounds(p) || obstacles.is_blocked_at(p)
}

/// Moves the player one tile. A refused step leaves the position alone but
/// still turns the player to face `dir`.
pub fn step(player: &mut Player, dir: Direction, scenario: &Scenario, obstacles: &ObstacleMap) -> bool {
    player.facing = dir;
    let next = player.pos.offset(dir);
    if cell_solid(scenario, obstacles, next) {
        return false;
    }
    player.pos = next;
    true
}

/// Held directions for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn any(&self) -> bool { self.up || self.down || self.left || self.right }

    /// Up, down, left, right.
    pub fn in_order(&self) -> impl Iterator<Item = Direction> {
        let held = [self.up, self.down, self.left, self.right];
        Direction::ALL.into_iter().zip(held).filter(|(_, h)| *h).map(|(d, _)| d)
    }
}

/// Applies every held direction in turn. Returns how many steps succeeded.
pub fn apply(player: &mut Player, held: HeldDirections, scenario: &Scenario, obstacles: &ObstacleMap) -> usize {
    held.in_order().filter(|&d| step(player, d, scenario, obstacles)).count()
}
