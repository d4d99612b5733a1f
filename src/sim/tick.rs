//! Fixed-cadence simulation tick
//!
//! Motion is per tick, not per elapsed time: the loop's frame clock keeps
//! ticks at the configured rate and the elapsed milliseconds never reach
//! the physics.

use super::collision::{player_hits_asteroid, resolve_laser_hits};
use super::entity::{self, update_attached};
use super::input::{Command, Key, TickInput, apply_key};
use super::state::World;

/// Whether the game should keep running after this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    Quit,
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &TickInput) -> TickStatus {
    // Input
    for event in &input.events {
        if event.key == Key::Quit {
            log::info!("Quit requested on tick {}", world.time_ticks);
            return TickStatus::Quit;
        }
        let alive = world.player.alive;
        let Some(flight) = world.player.flight_mut() else {
            continue;
        };
        // Quit was handled above
        if apply_key(flight, alive, *event) == Some(Command::Fire) {
            world.spawn_laser();
        }
    }

    // Ship vs asteroids (asteroids survive)
    if player_hits_asteroid(&world.player, &world.asteroids) {
        world.destroy_player();
    }

    // Lasers vs asteroids, one replacement per asteroid lost
    let destroyed = resolve_laser_hits(&mut world.projectiles, &mut world.asteroids);
    if destroyed > 0 {
        log::debug!("{destroyed} asteroid(s) shot down on tick {}", world.time_ticks);
        for _ in 0..destroyed {
            world.spawn_asteroid();
        }
    }

    advance(world);
    world.compact();
    world.time_ticks += 1;

    log::trace!(
        "tick {}: {} asteroids, {} projectiles, ship {}",
        world.time_ticks,
        world.asteroids.len(),
        world.projectiles.len(),
        if world.player.alive { "alive" } else { "dead" }
    );

    TickStatus::Running
}

/// Move everything, in draw order
fn advance(world: &mut World) {
    if world.player.alive {
        entity::update(&mut world.player);
    }

    // The exhaust tracks the ship even after it is gone
    update_attached(&mut world.engine_fire, world.player.pos, world.player.direction);

    for asteroid in world.asteroids.iter_mut().filter(|e| e.alive) {
        entity::update(asteroid);
    }
    for projectile in world.projectiles.iter_mut().filter(|e| e.alive) {
        entity::update(projectile);
    }
}
