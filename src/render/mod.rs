//! Raylib drawing for the board, HUD and menus.
//!
//! Re-exports:
//! - `textures`: Sprite loading with procedural fallbacks
//! - `sprites`: Board, obstacles, enemies and hero
//! - `hud`: Side panel and message strip
//! - `screens`: Menus, overlays and the end screen

pub mod textures;
pub mod sprites;
pub mod hud;
pub mod screens;
