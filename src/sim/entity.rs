//! Entities and their per-tick updates
//!
//! Every game object is one `Entity`. What it does each tick is selected by
//! its `Behavior`; screen wrap is an optional capability on top. The update
//! functions are free functions so the world can borrow collections
//! independently (the engine fire reads the player while it updates).

use glam::DVec2;

use super::sprite::{Sprite, SpriteImage};
use super::wrap::ScreenWrap;
use crate::consts::*;
use crate::{clamp_magnitude, heading_vector};

/// Lifetime sentinel for entities that never expire
pub const INFINITE_LIFE: i64 = -1;

/// What an entity is, for spawning/logging/drawing decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    EngineFire,
    Asteroid,
    Laser,
    Debris,
}

/// Constant-heading, constant-speed motion with a lifetime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    /// Pixels per tick
    pub speed: f64,
    /// Ticks left; negative means forever
    pub life: i64,
}

/// Player flight controls and velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Flight {
    pub velocity: DVec2,
    /// 0 or +TURN_SPEED
    pub turn_left: f64,
    /// 0 or -TURN_SPEED
    pub turn_right: f64,
    /// 0 or ACCELERATION
    pub thrust_up: f64,
    /// Never bound to a key; kept so reverse thrust is a one-line change
    pub thrust_down: f64,
}

/// Rigid attachment to an anchor entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attachment {
    /// x = right, y = forward/back in the anchor's frame
    pub offset: DVec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    Drift(Drift),
    Flight(Flight),
    Attached(Attachment),
}

/// A game object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: DVec2,
    /// Degrees, 0 = +y, increasing toward +x
    pub direction: f64,
    pub alive: bool,
    pub sprite: Sprite,
    pub wrap: Option<ScreenWrap>,
    pub behavior: Behavior,
}

impl Entity {
    pub fn new(
        id: u32,
        kind: EntityKind,
        image: SpriteImage,
        source_size: DVec2,
        pos: DVec2,
        direction: f64,
        behavior: Behavior,
    ) -> Self {
        Self {
            id,
            kind,
            pos,
            direction,
            alive: true,
            sprite: Sprite::new(image, source_size, pos, direction),
            wrap: None,
            behavior,
        }
    }

    pub fn with_wrap(mut self, wrap: ScreenWrap) -> Self {
        self.wrap = Some(wrap);
        self
    }

    pub fn flight(&self) -> Option<&Flight> {
        match &self.behavior {
            Behavior::Flight(f) => Some(f),
            _ => None,
        }
    }

    pub fn flight_mut(&mut self) -> Option<&mut Flight> {
        match &mut self.behavior {
            Behavior::Flight(f) => Some(f),
            _ => None,
        }
    }

    pub fn drift(&self) -> Option<&Drift> {
        match &self.behavior {
            Behavior::Drift(d) => Some(d),
            _ => None,
        }
    }

    /// Current speed (pixels/tick) regardless of behavior
    pub fn speed(&self) -> f64 {
        match &self.behavior {
            Behavior::Drift(d) => d.speed,
            Behavior::Flight(f) => f.velocity.length(),
            Behavior::Attached(_) => 0.0,
        }
    }

    /// Move to `candidate` (wrapped if this entity wraps) and refresh the sprite
    pub fn move_to(&mut self, candidate: DVec2) {
        self.pos = match &self.wrap {
            Some(wrap) => wrap.apply(candidate),
            None => candidate,
        };
        self.sprite.refresh(self.pos, self.direction);
    }
}

/// Advance a self-driven entity by one tick.
///
/// Attached entities need their anchor and are skipped here; use
/// [`update_attached`].
pub fn update(entity: &mut Entity) {
    match entity.behavior {
        Behavior::Drift(_) => update_drift(entity),
        Behavior::Flight(_) => update_flight(entity),
        Behavior::Attached(_) => {}
    }
}

/// Dead-reckoning step. Expired entities are marked dead without moving.
pub fn update_drift(entity: &mut Entity) {
    let Behavior::Drift(drift) = &mut entity.behavior else {
        return;
    };

    if drift.life == 0 {
        entity.alive = false;
        return;
    }
    if drift.life > 0 {
        drift.life -= 1;
    }

    let step = heading_vector(entity.direction) * drift.speed;
    entity.move_to(entity.pos - step);
}

/// Thrust/turn/drag step for the player ship
pub fn update_flight(entity: &mut Entity) {
    let Behavior::Flight(flight) = &mut entity.behavior else {
        return;
    };

    entity.direction += flight.turn_right + flight.turn_left;

    flight.velocity *= DECELERATION;
    flight.velocity += heading_vector(entity.direction) * (flight.thrust_up + flight.thrust_down);
    flight.velocity = clamp_magnitude(flight.velocity, MAX_FORWARD_SPEED);

    let velocity = flight.velocity;
    entity.move_to(entity.pos - velocity);
}

/// Follow an anchor at a fixed offset in its frame
pub fn update_attached(entity: &mut Entity, anchor_pos: DVec2, anchor_direction: f64) {
    let Behavior::Attached(attachment) = entity.behavior else {
        return;
    };

    entity.direction = anchor_direction;
    let (sin, cos) = anchor_direction.to_radians().sin_cos();
    let offset = attachment.offset;
    entity.pos = DVec2::new(
        anchor_pos.x + sin * offset.y - cos * offset.x,
        anchor_pos.y + cos * offset.y + sin * offset.x,
    );
    entity.sprite.refresh(entity.pos, entity.direction);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wrap() -> ScreenWrap {
        ScreenWrap::new(1024.0, 768.0, 120.0)
    }

    fn floater(pos: DVec2, direction: f64, speed: f64, life: i64) -> Entity {
        Entity::new(
            1,
            EntityKind::Laser,
            SpriteImage::Laser,
            DVec2::new(9.0, 54.0),
            pos,
            direction,
            Behavior::Drift(Drift { speed, life }),
        )
        .with_wrap(wrap())
    }

    fn ship(pos: DVec2) -> Entity {
        Entity::new(
            0,
            EntityKind::Player,
            SpriteImage::Player,
            DVec2::new(99.0, 75.0),
            pos,
            0.0,
            Behavior::Flight(Flight::default()),
        )
        .with_wrap(wrap())
    }

    #[test]
    fn test_drift_moves_against_heading() {
        let mut e = floater(DVec2::new(500.0, 400.0), 0.0, 2.0, INFINITE_LIFE);
        update_drift(&mut e);
        assert!((e.pos.x - 500.0).abs() < 1e-9);
        assert!((e.pos.y - 398.0).abs() < 1e-9);
        assert_eq!(e.sprite.rect.center(), e.pos);
    }

    #[test]
    fn test_drift_life_three_expires_on_fourth_update() {
        let mut e = floater(DVec2::new(500.0, 400.0), 90.0, 1.0, 3);
        for _ in 0..3 {
            update_drift(&mut e);
            assert!(e.alive);
        }
        assert_eq!(e.drift().unwrap().life, 0);
        let before = e.pos;
        update_drift(&mut e);
        assert!(!e.alive);
        assert_eq!(e.pos, before);
    }

    #[test]
    fn test_drift_infinite_life_never_expires() {
        let mut e = floater(DVec2::new(500.0, 400.0), 33.0, 7.0, INFINITE_LIFE);
        for _ in 0..10_000 {
            update_drift(&mut e);
        }
        assert!(e.alive);
        assert_eq!(e.drift().unwrap().life, INFINITE_LIFE);
        assert!(wrap().contains(e.pos));
    }

    #[test]
    fn test_drift_wraps_off_top() {
        let mut e = floater(DVec2::new(300.0, -119.0), 0.0, 2.0, INFINITE_LIFE);
        update_drift(&mut e);
        // -121 wraps by 768 + 240
        assert!((e.pos.y - 887.0).abs() < 1e-9);
    }

    #[test]
    fn test_flight_turn_inputs_cancel() {
        let mut e = ship(DVec2::new(512.0, 384.0));
        {
            let f = e.flight_mut().unwrap();
            f.turn_left = TURN_SPEED;
            f.turn_right = -TURN_SPEED;
        }
        update_flight(&mut e);
        assert_eq!(e.direction, 0.0);

        e.flight_mut().unwrap().turn_right = 0.0;
        update_flight(&mut e);
        assert_eq!(e.direction, TURN_SPEED);
    }

    #[test]
    fn test_flight_drag_decays_velocity() {
        let mut e = ship(DVec2::new(512.0, 384.0));
        e.flight_mut().unwrap().velocity = DVec2::new(10.0, 0.0);
        update_flight(&mut e);
        let v = e.flight().unwrap().velocity;
        assert!((v.x - 9.5).abs() < 1e-12);
        assert!((e.pos.x - (512.0 - 9.5)).abs() < 1e-9);
    }

    #[test]
    fn test_attached_follows_anchor_frame() {
        let mut fire = Entity::new(
            2,
            EntityKind::EngineFire,
            SpriteImage::EngineFire,
            DVec2::new(14.0, 31.0),
            DVec2::ZERO,
            0.0,
            Behavior::Attached(Attachment {
                offset: DVec2::new(0.0, 55.0),
            }),
        );

        update_attached(&mut fire, DVec2::new(512.0, 384.0), 0.0);
        assert!((fire.pos - DVec2::new(512.0, 439.0)).length() < 1e-9);

        update_attached(&mut fire, DVec2::new(512.0, 384.0), 90.0);
        assert!((fire.pos - DVec2::new(567.0, 384.0)).length() < 1e-9);
        assert_eq!(fire.direction, 90.0);
    }

    #[test]
    fn test_attached_sideways_offset() {
        let mut e = Entity::new(
            2,
            EntityKind::EngineFire,
            SpriteImage::EngineFire,
            DVec2::new(14.0, 31.0),
            DVec2::ZERO,
            0.0,
            Behavior::Attached(Attachment {
                offset: DVec2::new(10.0, 0.0),
            }),
        );
        update_attached(&mut e, DVec2::new(100.0, 100.0), 0.0);
        assert!((e.pos - DVec2::new(90.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn test_update_dispatch_skips_attached() {
        let mut e = Entity::new(
            2,
            EntityKind::EngineFire,
            SpriteImage::EngineFire,
            DVec2::new(14.0, 31.0),
            DVec2::new(5.0, 5.0),
            0.0,
            Behavior::Attached(Attachment { offset: DVec2::ZERO }),
        );
        update(&mut e);
        assert_eq!(e.pos, DVec2::new(5.0, 5.0));
    }

    proptest! {
        #[test]
        fn flight_speed_never_exceeds_cap(
            inputs in proptest::collection::vec((0u8..3, any::<bool>()), 1..200)
        ) {
            let mut e = ship(DVec2::new(512.0, 384.0));
            for (turn, thrust) in inputs {
                {
                    let f = e.flight_mut().unwrap();
                    f.turn_left = if turn == 1 { TURN_SPEED } else { 0.0 };
                    f.turn_right = if turn == 2 { -TURN_SPEED } else { 0.0 };
                    f.thrust_up = if thrust { ACCELERATION } else { 0.0 };
                }
                update_flight(&mut e);
                prop_assert!(e.flight().unwrap().velocity.length() <= MAX_FORWARD_SPEED + 1e-9);
                prop_assert!(wrap().contains(e.pos));
            }
        }
    }
}
