//! Weapons, ammo and shot ray-casting.
use crate::core::enemy::EnemyList;
use crate::core::grid::{GridPos, ObstacleMap, Scenario};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Weapon { Rifle, Revolver }

impl Weapon {
    /// Reach in tiles.
    pub fn range(self) -> f64 {
        match self {
            Weapon::Rifle => 8.0,
            Weapon::Revolver => 4.0,
        }
    }

    pub fn cooldown_ms(self) -> u64 {
        match self {
            Weapon::Rifle => 600,
            Weapon::Revolver => 250,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Weapon::Rifle => "Rifle",
            Weapon::Revolver => "Revolver",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Weapon::Rifle => Weapon::Revolver,
            Weapon::Revolver => Weapon::Rifle,
        }
    }
}

/// Ammo per weapon plus the one in hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arsenal {
    rifle: u32,
    revolver: u32,
    pub selected: Weapon,
}

impl Default for Arsenal {
    fn default() -> Self { Self::new(50, 30) }
}

impl Arsenal {
    pub fn new(rifle: u32, revolver: u32) -> Self {
        Self { rifle, revolver, selected: Weapon::Rifle }
    }

    pub fn ammo(&self, weapon: Weapon) -> u32 {
        match weapon {
            Weapon::Rifle => self.rifle,
            Weapon::Revolver => self.revolver,
        }
    }

    pub fn current_ammo(&self) -> u32 { self.ammo(self.selected) }

    pub fn has_ammo(&self, weapon: Weapon) -> bool { self.ammo(weapon) > 0 }

    pub fn add_ammo(&mut self, weapon: Weapon, rounds: u32) {
        let slot = self.slot(weapon);
        *slot = slot.saturating_add(rounds);
    }

    pub fn switch_weapon(&mut self) -> Weapon {
        self.selected = self.selected.other();
        self.selected
    }

    /// Spends one round of the selected weapon. `false` on an empty chamber.
    pub fn shoot(&mut self) -> bool {
        let slot = self.slot(self.selected);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    fn slot(&mut self, weapon: Weapon) -> &mut u32 {
        match weapon {
            Weapon::Rifle => &mut self.rifle,
            Weapon::Revolver => &mut self.revolver,
        }
    }
}

/// Angle of the vector (dx, dy) in degrees, normalised to [0, 360).
pub fn aim_at(dx: f64, dy: f64) -> f64 {
    let deg = dy.atan2(dx).to_degrees();
    if deg < 0.0 { deg + 360.0 } else { deg }
}

pub struct ShotHit {
    pub enemy_id: u32,
    pub distance: f64,
}

/// Walks the grid cell by cell from the centre of `from` and returns the first
/// enemy in the ray's path. Obstacles and the board edge stop the bullet, and so
/// does a corner squeezed between two obstacles.
pub fn cast_shot(
    from: GridPos,
    angle_deg: f64,
    range: f64,
    scenario: &Scenario,
    obstacles: &ObstacleMap,
    enemies: &EnemyList,
) -> Option<ShotHit> {
    let a = angle_deg.to_radians();
    let (dx, dy) = (a.cos(), a.sin());
    let step_x = if dx >= 0.0 { 1 } else { -1 };
    let step_y = if dy >= 0.0 { 1 } else { -1 };
    let delta_x = if dx.abs() < 1e-12 { f64::INFINITY } else { 1.0 / dx.abs() };
    let delta_y = if dy.abs() < 1e-12 { f64::INFINITY } else { 1.0 / dy.abs() };
    // starting at the centre, the first boundary is half a cell away on both axes
    let mut next_x = 0.5 * delta_x;
    let mut next_y = 0.5 * delta_y;

    let stops = |cell: GridPos| !scenario.in_bounds(cell) || obstacles.is_blocked_at(cell);
    let mut cell = from;
    loop {
        if stops(cell) {
            return None;
        }
        if let Some(enemy) = enemies.enemy_at(cell) {
            return Some(ShotHit { enemy_id: enemy.id, distance: from.distance(cell) });
        }

        let t = next_x.min(next_y);
        if t > range {
            return None;
        }
        if (next_x - next_y).abs() < 1e-9 {
            let side_x = GridPos::new(cell.x + step_x, cell.y);
            let side_y = GridPos::new(cell.x, cell.y + step_y);
            if stops(side_x) && stops(side_y) {
                return None;
            }
            cell = GridPos::new(cell.x + step_x, cell.y + step_y);
            next_x += delta_x;
            next_y += delta_y;
        } else if next_x < next_y {
            cell = GridPos::new(cell.x + step_x, cell.y);
            next_x += delta_x;
        } else {
            cell = GridPos::new(cell.x, cell.y + step_y);
            next_y += delta_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aim_is_normalised() {
        assert!((aim_at(1.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((aim_at(0.0, 1.0) - 90.0).abs() < 1e-9);
        assert!((aim_at(0.0, -1.0) - 270.0).abs() < 1e-9);
        assert!((aim_at(-1.0, 0.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn shooting_spends_selected_ammo_only() {
        let mut a = Arsenal::new(1, 2);
        assert!(a.shoot());
        assert!(!a.shoot());
        assert_eq!(a.ammo(Weapon::Revolver), 2);
        a.switch_weapon();
        assert!(a.shoot());
        assert_eq!(a.current_ammo(), 1);
    }
}
