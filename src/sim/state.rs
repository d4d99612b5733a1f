//! World state and spawning
//!
//! The world owns every entity, the seeded RNG and the settings it was built
//! with. Nothing here is global; the loop passes the world around explicitly.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Attachment, Behavior, Drift, Entity, EntityKind, Flight, INFINITE_LIFE};
use super::sprite::{Sprite, SpriteImage, SpriteSheet};
use super::wrap::ScreenWrap;
use crate::settings::Settings;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    pub sprites: SpriteSheet,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The ship. Stays here after death, flagged dead.
    pub player: Entity,
    /// Exhaust drawn behind the ship while thrusting
    pub engine_fire: Entity,
    pub asteroids: Vec<Entity>,
    /// Lasers and damage debris
    pub projectiles: Vec<Entity>,
    rng: Pcg32,
    next_id: u32,
}

impl World {
    /// Create a world with the ship at screen center and the initial asteroid field
    pub fn new(settings: Settings, sprites: SpriteSheet, seed: u64) -> Self {
        let mut world = Self::empty(settings, sprites, seed);
        for _ in 0..world.settings.asteroid_count {
            world.spawn_asteroid();
        }
        log::debug!(
            "World created (seed {seed}, {} asteroids)",
            world.asteroids.len()
        );
        world
    }

    /// Create a world with only the ship and its engine fire
    pub fn empty(settings: Settings, sprites: SpriteSheet, seed: u64) -> Self {
        let center = settings.screen_center();
        let wrap = ScreenWrap::new(
            settings.screen_width,
            settings.screen_height,
            settings.wrap_margin,
        );

        let player = Entity::new(
            1,
            EntityKind::Player,
            SpriteImage::Player,
            sprites.player,
            center,
            0.0,
            Behavior::Flight(Flight::default()),
        )
        .with_wrap(wrap);

        let engine_fire = Entity::new(
            2,
            EntityKind::EngineFire,
            SpriteImage::EngineFire,
            sprites.engine_fire,
            center,
            0.0,
            Behavior::Attached(Attachment {
                offset: settings.engine_fire_offset,
            }),
        );

        Self {
            settings,
            sprites,
            seed,
            time_ticks: 0,
            player,
            engine_fire,
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 3,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn screen_wrap(&self) -> ScreenWrap {
        ScreenWrap::new(
            self.settings.screen_width,
            self.settings.screen_height,
            self.settings.wrap_margin,
        )
    }

    pub fn player_alive(&self) -> bool {
        self.player.alive
    }

    /// Current ship controls. The player always flies.
    pub fn player_flight(&self) -> Flight {
        self.player.flight().copied().unwrap_or_default()
    }

    /// Random heading in whole degrees, 0..=360
    fn random_heading(&mut self) -> f64 {
        f64::from(self.rng.random_range(0..=360i32))
    }

    fn spawn_floater(
        &mut self,
        kind: EntityKind,
        image: SpriteImage,
        pos: DVec2,
        direction: f64,
        speed: f64,
        life: i64,
    ) -> Entity {
        let id = self.next_entity_id();
        Entity::new(
            id,
            kind,
            image,
            self.sprites.size(image),
            pos,
            direction,
            Behavior::Drift(Drift { speed, life }),
        )
        .with_wrap(self.screen_wrap())
    }

    /// Spawn an asteroid above the screen at a random offset from the ship
    pub fn spawn_asteroid(&mut self) -> u32 {
        let width = self.settings.screen_width as i64;
        let x = self.rng.random_range(0..=width) as f64 + self.player.pos.x;
        let pos = DVec2::new(x, self.settings.asteroid_spawn_y);
        let direction = self.random_heading();
        self.spawn_asteroid_at(pos, direction)
    }

    pub fn spawn_asteroid_at(&mut self, pos: DVec2, direction: f64) -> u32 {
        let speed = self.settings.asteroid_speed;
        let asteroid = self.spawn_floater(
            EntityKind::Asteroid,
            SpriteImage::Asteroid,
            pos,
            direction,
            speed,
            INFINITE_LIFE,
        );
        let id = asteroid.id;
        self.asteroids.push(asteroid);
        id
    }

    /// Fire a laser from the ship, inheriting its speed
    pub fn spawn_laser(&mut self) -> u32 {
        let pos = self.player.pos;
        let direction = self.player.direction;
        let speed = self.settings.laser_base_speed + self.player.speed();
        let life = self.settings.laser_lifetime;
        let laser =
            self.spawn_floater(EntityKind::Laser, SpriteImage::Laser, pos, direction, speed, life);
        let id = laser.id;
        self.projectiles.push(laser);
        log::debug!("Laser {id} fired at {direction:.0}° speed {speed:.1}");
        id
    }

    /// Scatter one debris floater per damage image from the ship's position
    pub fn spawn_debris(&mut self) {
        let pos = self.player.pos;
        let speed = self.settings.debris_speed;
        let life = self.settings.debris_lifetime;
        for i in 0..self.sprites.debris_count() {
            let direction = self.random_heading();
            let image = SpriteImage::Debris(i);
            let debris = self.spawn_floater(EntityKind::Debris, image, pos, direction, speed, life);
            self.projectiles.push(debris);
        }
    }

    /// Destroy the ship: debris, engine off, no more input.
    pub fn destroy_player(&mut self) {
        if !self.player.alive {
            return;
        }
        self.spawn_debris();
        if let Some(flight) = self.player.flight_mut() {
            flight.thrust_up = 0.0;
        }
        self.player.alive = false;
        log::info!(
            "Ship destroyed at ({:.0}, {:.0}) on tick {}",
            self.player.pos.x,
            self.player.pos.y,
            self.time_ticks
        );
    }

    /// Whether the engine fire is drawn this frame
    pub fn engine_fire_visible(&self) -> bool {
        self.player_flight().thrust_up > 0.0
    }

    /// Drop dead asteroids and projectiles
    pub fn compact(&mut self) {
        self.asteroids.retain(|e| e.alive);
        self.projectiles.retain(|e| e.alive);
    }

    /// Sprites to draw, in draw order: ship, engine fire, asteroids, projectiles
    pub fn draw_list(&self) -> impl Iterator<Item = &Sprite> + '_ {
        let player = self.player.alive.then_some(&self.player.sprite);
        let fire = self.engine_fire_visible().then_some(&self.engine_fire.sprite);
        player
            .into_iter()
            .chain(fire)
            .chain(self.asteroids.iter().filter(|e| e.alive).map(|e| &e.sprite))
            .chain(self.projectiles.iter().filter(|e| e.alive).map(|e| &e.sprite))
    }
}
