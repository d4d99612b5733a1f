//! Platform abstraction layer
//!
//! What the game needs from its window/input/timing collaborator:
//! - Input events (key edges)
//! - Sprite drawing
//! - A fixed-rate frame clock
//!
//! Headless implementations live in `headless` and `clock`; a windowed
//! backend only has to implement these three traits.

pub mod clock;
pub mod headless;

pub use clock::{ManualClock, SleepClock};
pub use headless::{DrawCall, RecordingRenderer, ScriptedEvents};

use crate::sim::{KeyEvent, Sprite};

/// Source of key edges
pub trait EventSource {
    /// Everything that happened since the previous poll, oldest first
    fn poll_events(&mut self) -> Vec<KeyEvent>;
}

/// Draws rotated sprites into a frame
pub trait Renderer {
    /// Start a new frame (black background)
    fn clear(&mut self);
    /// Draw `sprite.image` rotated by `sprite.rotation` into `sprite.rect`
    fn draw(&mut self, sprite: &Sprite);
    /// Show the finished frame
    fn present(&mut self);
}

/// Caps the loop rate
pub trait FrameClock {
    /// Wait until the next tick is due; returns milliseconds since the previous one
    fn tick(&mut self, target_hz: u32) -> u64;
}
