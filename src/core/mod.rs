//! Core game types and logic (world, actors, items, journey).
//!
//! Nothing in here touches raylib or rodio; the binary drives it through
//! `session::Session`.
//!
//! Re-exports:
//! - `grid`: Board positions, directions, scenarios and obstacle maps
//! - `player`, `caravan`: The traveler and their party
//! - `movement`: Bounded single-tile movement
//! - `enemy`, `spawner`, `combat`: Hostiles, their placement and shooting them
//! - `list`, `sort`, `tree`: Containers behind inventory, enemies and achievements
//! - `inventory`, `shop`: Supplies and buying them
//! - `achievements`: Catalog, unlocked set and unlock conditions
//! - `game`: Days, miles, win and loss
//! - `session`: One frame of play over all of the above

pub mod grid;
pub mod player;
pub mod combat;
pub mod list;
pub mod sort;
pub mod enemy;
pub mod spawner;
pub mod tree;
pub mod achievements;
pub mod caravan;
pub mod inventory;
pub mod movement;
pub mod game;
pub mod shop;
pub mod session;
