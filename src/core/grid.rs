//! Tile grid, scenarios and static obstacle maps.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Integer tile coordinates. `y` grows downwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: GridPos) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn manhattan(self, other: GridPos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn chebyshev(self, other: GridPos) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction { Up, Down, Left, Right }

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Angle in degrees, screen convention (0 = right, 90 = down).
    pub fn angle_deg(self) -> f64 {
        match self {
            Direction::Right => 0.0,
            Direction::Down => 90.0,
            Direction::Left => 180.0,
            Direction::Up => 270.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioType { Start, Road, River }

impl ScenarioType {
    /// Scenario for a journey that has covered `distance` of `total` miles.
    pub fn for_progress(distance: u32, total: u32) -> Self {
        if total == 0 || distance * 3 < total {
            ScenarioType::Start
        } else if distance * 3 < total * 2 {
            ScenarioType::Road
        } else {
            ScenarioType::River
        }
    }

    pub fn max_enemies(self) -> usize {
        match self {
            ScenarioType::Start => 5,
            ScenarioType::Road => 7,
            ScenarioType::River => 9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScenarioType::Start => "Plains",
            ScenarioType::Road => "Mountains",
            ScenarioType::River => "River",
        }
    }
}

/// The board the current stage is played on.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    pub kind: ScenarioType,
}

impl Scenario {
    pub fn new(width: i32, height: i32, kind: ScenarioType) -> Self {
        Self { width: width.max(1), height: height.max(1), kind }
    }

    pub fn in_bounds(&self, p: GridPos) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    pub fn max_enemies(&self) -> usize { self.kind.max_enemies() }
}

/// Static obstacles. Bounds are the movement controller's job, not this one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleMap {
    name: String,
    blocked: HashSet<GridPos>,
}

impl ObstacleMap {
    pub fn empty(name: &str) -> Self {
        Self { name: name.to_string(), blocked: HashSet::new() }
    }

    /// Layout used when the map file can't be read.
    pub fn builtin(name: &str) -> Self {
        let mut map = Self::empty(name);
        if name == "llanuras.map" {
            // rock, tree, bush
            map.blocked.extend([GridPos::new(2, 1), GridPos::new(7, 5), GridPos::new(10, 3)]);
        }
        map
    }

    /// `#` is an obstacle, everything else is walkable.
    pub fn parse(name: &str, text: &str) -> Self {
        let mut map = Self::empty(name);
        for (y, line) in text.lines().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                if ch == '#' {
                    map.blocked.insert(GridPos::new(x as i32, y as i32));
                }
            }
        }
        map
    }

    /// Reads `<dir>/<name>`, falling back to [`ObstacleMap::builtin`].
    pub fn load(dir: impl AsRef<Path>, name: &str) -> Self {
        let path = dir.as_ref().join(name);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(err) => {
                log::warn!("Could not open map {}: {err}; using built-in layout", path.display());
                return Self::builtin(name);
            }
        };
        let mut text = String::new();
        for line in BufReader::new(file).lines() {
            match line {
                Ok(s) => {
                    text.push_str(&s);
                    text.push('\n');
                }
                Err(err) => {
                    log::warn!("Error reading map {}: {err}; using built-in layout", path.display());
                    return Self::builtin(name);
                }
            }
        }
        Self::parse(name, &text)
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.blocked.contains(&GridPos::new(x, y))
    }

    pub fn is_blocked_at(&self, p: GridPos) -> bool { self.blocked.contains(&p) }

    pub fn iter(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.blocked.iter().copied()
    }
}

/// Map file for each stage of the trail.
pub fn map_for(kind: ScenarioType, start_map: &str) -> String {
    match kind {
        ScenarioType::Start => start_map.to_string(),
        ScenarioType::Road => "montana.map".to_string(),
        ScenarioType::River => "rio.map".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_marks_hashes_only() {
        let map = ObstacleMap::parse("t", "..#\n#..\n");
        assert!(map.is_blocked(2, 0));
        assert!(map.is_blocked(0, 1));
        assert!(!map.is_blocked(1, 1));
        assert!(!map.is_blocked(5, 5));
    }

    #[test]
    fn missing_file_uses_builtin_layout() {
        let map = ObstacleMap::load("definitely/not/here", "llanuras.map");
        assert!(map.is_blocked(2, 1));
        assert!(map.is_blocked(7, 5));
        assert!(map.is_blocked(10, 3));
        assert!(!map.is_blocked(0, 0));
        let other = ObstacleMap::load("definitely/not/here", "rio.map");
        assert_eq!(other.iter().count(), 0);
    }

    #[test]
    fn scenario_follows_progress() {
        assert_eq!(ScenarioType::for_progress(0, 2000), ScenarioType::Start);
        assert_eq!(ScenarioType::for_progress(666, 2000), ScenarioType::Start);
        assert_eq!(ScenarioType::for_progress(667, 2000), ScenarioType::Road);
        assert_eq!(ScenarioType::for_progress(1334, 2000), ScenarioType::River);
    }
}
