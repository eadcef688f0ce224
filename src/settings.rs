//! Game settings and preferences
//!
//! Read from LocalStorage on the web build; never written back.

use serde::{Deserialize, Serialize};

use crate::input::InputBindings;
use crate::sim::Player;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Controls ===
    /// Left paddle keys
    pub player_one: InputBindings,
    /// Right paddle keys
    pub player_two: InputBindings,

    // === Simulation ===
    /// Fixed RNG seed for reproducible matches (clock-seeded when absent)
    pub seed: Option<u64>,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_one: InputBindings::LEFT_HAND,
            player_two: InputBindings::ARROWS,
            seed: None,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Bindings for `player`
    pub fn bindings(&self, player: Player) -> InputBindings {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Use the configured seed, or fall back to `fallback` (usually the clock)
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pingo_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
