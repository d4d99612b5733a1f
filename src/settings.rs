//! Game settings
//!
//! Everything tunable without a rebuild. Loaded from an optional JSON file;
//! missing fields fall back to the defaults below.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Image paths for every sprite, relative to the asset root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpritePaths {
    pub player: String,
    pub engine_fire: String,
    pub asteroid: String,
    pub laser: String,
    /// One debris floater is spawned per entry when the ship is destroyed
    pub debris: Vec<String>,
}

impl Default for SpritePaths {
    fn default() -> Self {
        Self {
            player: "PNG/playerShip1_blue.png".into(),
            engine_fire: "PNG/Effects/fire09.png".into(),
            asteroid: "PNG/Meteors/meteorBrown_big1.png".into(),
            laser: "PNG/Lasers/laserBlue01.png".into(),
            debris: vec![
                "PNG/Damage/playerShip1_damage1.png".into(),
                "PNG/Damage/playerShip1_damage2.png".into(),
                "PNG/Damage/playerShip1_damage3.png".into(),
            ],
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f64,
    pub screen_height: f64,
    /// How far past the edge a sprite travels before wrapping
    pub wrap_margin: f64,
    /// Simulation ticks per second
    pub tick_rate: u32,

    // === Asteroids ===
    pub asteroid_count: usize,
    pub asteroid_speed: f64,
    /// Spawn row, above the visible screen
    pub asteroid_spawn_y: f64,

    // === Lasers ===
    /// Added to the ship's current speed
    pub laser_base_speed: f64,
    pub laser_lifetime: i64,

    // === Debris ===
    pub debris_speed: f64,
    /// Ticks; -1 keeps debris forever
    pub debris_lifetime: i64,

    // === Effects ===
    /// Engine fire offset in the ship frame (x = right, y = back)
    pub engine_fire_offset: DVec2,

    pub sprites: SpritePaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1024.0,
            screen_height: 768.0,
            wrap_margin: 120.0,
            tick_rate: 30,

            asteroid_count: 15,
            asteroid_speed: 2.0,
            asteroid_spawn_y: -120.0,

            laser_base_speed: 30.0,
            laser_lifetime: 15,

            debris_speed: 1.0,
            debris_lifetime: 90,

            engine_fire_offset: DVec2::new(0.0, 55.0),

            sprites: SpritePaths::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if !(self.wrap_margin >= 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "wrap_margin must be non-negative, got {}",
                self.wrap_margin
            )));
        }
        if self.tick_rate == 0 {
            return Err(GameError::InvalidSettings("tick_rate must be at least 1".into()));
        }
        if self.laser_lifetime < 1 {
            return Err(GameError::InvalidSettings(format!(
                "laser_lifetime must be at least 1 tick, got {}",
                self.laser_lifetime
            )));
        }
        if self.debris_lifetime < -1 {
            return Err(GameError::InvalidSettings(format!(
                "debris_lifetime must be -1 (forever) or non-negative, got {}",
                self.debris_lifetime
            )));
        }
        if !(self.asteroid_speed >= 0.0 && self.debris_speed >= 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "speeds must be non-negative, got asteroid {} debris {}",
                self.asteroid_speed, self.debris_speed
            )));
        }
        if self.sprites.debris.is_empty() {
            return Err(GameError::InvalidSettings(
                "sprites.debris needs at least one image".into(),
            ));
        }
        Ok(())
    }

    pub fn screen_center(&self) -> DVec2 {
        DVec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}
