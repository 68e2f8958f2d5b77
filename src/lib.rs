//! Oregon Trail: a tile-based survival trek from Independence to Oregon.
//!
//! The library holds everything that does not need a window: the game model
//! under [`core`], configuration, errors and the dialogue client. The
//! `oregon-trail` binary adds raylib rendering, input and rodio audio on top.

pub mod config;
pub mod core;
pub mod dialogue;
pub mod error;

pub use config::Config;
pub use error::{GameError, GameResult};
