//! Headless collaborator: scripted input and a renderer that records frames
//!
//! Used by the native binary (no window) and by loop tests.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EventSource, Renderer};
use crate::error::GameError;
use crate::sim::{Key, KeyEvent, Rect, Sprite, SpriteImage};

/// One scripted key edge, delivered on the given poll (tick) number
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub tick: u64,
    pub key: Key,
    pub pressed: bool,
}

/// Replays key edges from a script, one poll per tick
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    pending: BTreeMap<u64, Vec<KeyEvent>>,
    polls: u64,
}

impl ScriptedEvents {
    pub fn new(entries: impl IntoIterator<Item = ScriptEntry>) -> Self {
        let mut pending: BTreeMap<u64, Vec<KeyEvent>> = BTreeMap::new();
        for entry in entries {
            pending.entry(entry.tick).or_default().push(KeyEvent {
                key: entry.key,
                pressed: entry.pressed,
            });
        }
        Self { pending, polls: 0 }
    }

    /// Load a JSON array of `{ "tick", "key", "pressed" }` entries
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<ScriptEntry> =
            serde_json::from_str(&json).map_err(|source| GameError::Script {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("Loaded {} scripted key events from {}", entries.len(), path.display());
        Ok(Self::new(entries))
    }

    /// Whether every scripted event has been delivered
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self) -> Vec<KeyEvent> {
        let events = self.pending.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        events
    }
}

/// A sprite draw as the renderer saw it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub image: SpriteImage,
    pub rotation: f64,
    pub rect: Rect,
}

/// Renderer that keeps the last presented frame's draw calls
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames_presented: u64,
    pub last_frame: Vec<DrawCall>,
    current: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.current.clear();
    }

    fn draw(&mut self, sprite: &Sprite) {
        self.current.push(DrawCall {
            image: sprite.image,
            rotation: sprite.rotation,
            rect: sprite.rect,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.current);
        self.frames_presented += 1;
    }
}
