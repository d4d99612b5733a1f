//! Key events and their effect on the player's controls

use serde::{Deserialize, Serialize};

use super::entity::Flight;
use crate::consts::{ACCELERATION, TURN_SPEED};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Quit,
}

/// A key edge (press or release)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn press(key: Key) -> Self {
        Self { key, pressed: true }
    }

    pub fn release(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// What a key event asks of the world beyond control state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire,
    Quit,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Edges since the previous tick, in arrival order
    pub events: Vec<KeyEvent>,
}

impl TickInput {
    pub fn new(events: Vec<KeyEvent>) -> Self {
        Self { events }
    }
}

/// Apply one key edge to the ship's controls.
///
/// Control keys only act on a live ship; quit always gets through.
pub fn apply_key(flight: &mut Flight, player_alive: bool, event: KeyEvent) -> Option<Command> {
    if event.key == Key::Quit {
        return Some(Command::Quit);
    }
    if !player_alive {
        return None;
    }

    let held = if event.pressed { 1.0 } else { 0.0 };
    match event.key {
        Key::Right => flight.turn_right = -TURN_SPEED * held,
        Key::Left => flight.turn_left = TURN_SPEED * held,
        Key::Up => flight.thrust_up = ACCELERATION * held,
        Key::Fire if event.pressed => return Some(Command::Fire),
        Key::Fire | Key::Down | Key::Quit => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_keys_are_signed() {
        let mut f = Flight::default();
        apply_key(&mut f, true, KeyEvent::press(Key::Left));
        apply_key(&mut f, true, KeyEvent::press(Key::Right));
        assert_eq!(f.turn_left, TURN_SPEED);
        assert_eq!(f.turn_right, -TURN_SPEED);

        apply_key(&mut f, true, KeyEvent::release(Key::Left));
        assert_eq!(f.turn_left, 0.0);
        assert_eq!(f.turn_right, -TURN_SPEED);
    }

    #[test]
    fn test_fire_only_on_press() {
        let mut f = Flight::default();
        assert_eq!(apply_key(&mut f, true, KeyEvent::press(Key::Fire)), Some(Command::Fire));
        assert_eq!(apply_key(&mut f, true, KeyEvent::release(Key::Fire)), None);
    }

    #[test]
    fn test_dead_ship_ignores_controls_but_not_quit() {
        let mut f = Flight::default();
        assert_eq!(apply_key(&mut f, false, KeyEvent::press(Key::Up)), None);
        assert_eq!(apply_key(&mut f, false, KeyEvent::press(Key::Fire)), None);
        assert_eq!(f, Flight::default());
        assert_eq!(apply_key(&mut f, false, KeyEvent::press(Key::Quit)), Some(Command::Quit));
    }

    #[test]
    fn test_down_key_leaves_reverse_thrust_unbound() {
        let mut f = Flight::default();
        apply_key(&mut f, true, KeyEvent::press(Key::Down));
        assert_eq!(f.thrust_down, 0.0);
    }

    #[test]
    fn test_key_event_json() {
        let json = r#"{ "key": "fire", "pressed": true }"#;
        let event: KeyEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, KeyEvent::press(Key::Fire));
    }
}
