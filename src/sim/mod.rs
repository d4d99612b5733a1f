//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Per-tick motion only (no wall-clock time)
//! - Seeded RNG only
//! - Stable iteration order (collections keep spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod input;
pub mod sprite;
pub mod state;
pub mod tick;
pub mod wrap;

pub use collision::{player_hits_asteroid, resolve_laser_hits};
pub use entity::{
    Attachment, Behavior, Drift, Entity, EntityKind, Flight, INFINITE_LIFE, update, update_attached,
    update_drift, update_flight,
};
pub use input::{Command, Key, KeyEvent, TickInput, apply_key};
pub use sprite::{Rect, Sprite, SpriteImage, SpriteSheet, rotated_extent};
pub use state::World;
pub use tick::{TickStatus, tick};
pub use wrap::ScreenWrap;
