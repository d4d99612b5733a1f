//! Asteroid Drift - a screen-wrapping asteroid shooter
//!
//! Core modules:
//! - `sim`: Tick-based simulation (entities, flight model, collisions, world)
//! - `platform`: Input/render/clock collaborator traits plus headless backends
//! - `assets`: Sprite image catalog
//! - `game_loop`: Fixed-cadence poll/tick/draw loop
//! - `settings`: JSON-loadable configuration

pub mod assets;
pub mod error;
pub mod game_loop;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::Settings;

use glam::DVec2;

/// Flight model constants
pub mod consts {
    /// Player speed cap (pixels/tick)
    pub const MAX_FORWARD_SPEED: f64 = 15.0;
    /// Thrust impulse added per tick while the thrust key is held
    pub const ACCELERATION: f64 = 2.0;
    /// Per-tick multiplicative drag
    pub const DECELERATION: f64 = 0.95;
    /// Turn rate (degrees/tick)
    pub const TURN_SPEED: f64 = 5.0;
}

/// Unit vector for a heading in degrees.
///
/// 0° points along +y and increasing angles sweep toward +x. Entities move
/// by *subtracting* this vector, which is "forward" on a y-down screen.
#[inline]
pub fn heading_vector(direction: f64) -> DVec2 {
    let rad = direction.to_radians();
    DVec2::new(rad.sin(), rad.cos())
}

/// Scale `v` down to length `max` if it is longer, keeping its direction
#[inline]
pub fn clamp_magnitude(v: DVec2, max: f64) -> DVec2 {
    let len = v.length();
    if len > max { v * (max / len) } else { v }
}
