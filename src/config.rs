//! Runtime configuration loaded from `config.json`.
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::GameResult;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Value shipped in the sample config; treated as "no key".
const PLACEHOLDER_KEY: &str = "TU_API_KEY_AQUI";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub window_width: i32,
    pub window_height: i32,
    pub board_width: i32,
    pub board_height: i32,
    pub tile_size: i32,
    pub map_name: String,
    pub safe_radius: i32,
    pub move_interval_ms: u64,
    pub enemy_step_ms: u64,
    pub spawn_interval_ms: u64,
    pub hit_cooldown_ms: u64,
    pub day_length_secs: f64,
    pub target_fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_api_url: DEFAULT_GEMINI_URL.to_string(),
            window_width: 900,
            window_height: 700,
            board_width: 20,
            board_height: 20,
            tile_size: 32,
            map_name: "llanuras.map".to_string(),
            safe_radius: 3,
            move_interval_ms: 120,
            enemy_step_ms: 450,
            spawn_interval_ms: 1500,
            hit_cooldown_ms: 1000,
            day_length_secs: 4.0,
            target_fps: 60,
        }
    }
}

impl Config {
    /// Loads `path`. A missing file is not an error: defaults are returned.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let mut config = match fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_json(&text)?;
                log::info!("Configuration loaded from {}", path.display());
                config
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("{} not found, using default configuration", path.display());
                Self::default()
            }
            Err(err) => return Err(err.into()),
        };
        config.apply_env();
        Ok(config)
    }

    /// `GEMINI_API_KEY` wins over whatever the file says.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.gemini_api_key = Some(key);
        }
    }

    pub fn from_json(text: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The API key, unless it is empty or still the placeholder.
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_KEY)
    }

    pub fn is_gemini_configured(&self) -> bool {
        self.api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = Config::from_json(r#"{ "board_width": 12, "safe_radius": 5 }"#).unwrap();
        assert_eq!(cfg.board_width, 12);
        assert_eq!(cfg.safe_radius, 5);
        assert_eq!(cfg.board_height, 20);
        assert_eq!(cfg.gemini_api_url, DEFAULT_GEMINI_URL);
    }

    #[test]
    fn placeholder_key_is_not_configured() {
        let cfg = Config::from_json(r#"{ "gemini_api_key": "TU_API_KEY_AQUI" }"#).unwrap();
        assert!(!cfg.is_gemini_configured());
        let cfg = Config::from_json(r#"{ "gemini_api_key": "  " }"#).unwrap();
        assert!(!cfg.is_gemini_configured());
        let cfg = Config::from_json(r#"{ "gemini_api_key": "abc" }"#).unwrap();
        assert_eq!(cfg.api_key(), Some("abc"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ board_width: ").is_err());
    }
}
