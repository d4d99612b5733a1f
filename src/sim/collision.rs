//! Collision passes
//!
//! Both passes test the sprites' rotated bounding boxes as left by the
//! previous update. They only clear `alive` flags; removal happens when the
//! world compacts at the end of the tick.

use super::entity::{Entity, EntityKind};

/// Whether the ship's bounds overlap any live asteroid
pub fn player_hits_asteroid(player: &Entity, asteroids: &[Entity]) -> bool {
    player.alive
        && asteroids
            .iter()
            .any(|a| a.alive && player.sprite.rect.intersects(&a.sprite.rect))
}

/// Lasers vs asteroids.
///
/// Each live laser destroys every live asteroid it overlaps and is destroyed
/// with them. An asteroid already destroyed by an earlier laser this pass is
/// out of play for later ones. Debris shares the projectile list but does not
/// collide. Returns the number of asteroids destroyed.
pub fn resolve_laser_hits(projectiles: &mut [Entity], asteroids: &mut [Entity]) -> usize {
    let mut destroyed = 0;

    for laser in projectiles
        .iter_mut()
        .filter(|p| p.alive && p.kind == EntityKind::Laser)
    {
        let mut hit = false;
        for asteroid in asteroids.iter_mut().filter(|a| a.alive) {
            if laser.sprite.rect.intersects(&asteroid.sprite.rect) {
                asteroid.alive = false;
                destroyed += 1;
                hit = true;
            }
        }
        if hit {
            laser.alive = false;
        }
    }

    destroyed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Behavior, Drift, Flight, INFINITE_LIFE};
    use crate::sim::sprite::SpriteImage;
    use glam::DVec2;

    fn floater(id: u32, kind: EntityKind, pos: DVec2, size: f64) -> Entity {
        let image = match kind {
            EntityKind::Asteroid => SpriteImage::Asteroid,
            EntityKind::Debris => SpriteImage::Debris(0),
            _ => SpriteImage::Laser,
        };
        Entity::new(
            id,
            kind,
            image,
            DVec2::splat(size),
            pos,
            0.0,
            Behavior::Drift(Drift {
                speed: 0.0,
                life: INFINITE_LIFE,
            }),
        )
    }

    #[test]
    fn test_player_hit_requires_overlap_and_life() {
        let mut player = Entity::new(
            1,
            EntityKind::Player,
            SpriteImage::Player,
            DVec2::splat(20.0),
            DVec2::new(100.0, 100.0),
            0.0,
            Behavior::Flight(Flight::default()),
        );
        let mut asteroids = vec![
            floater(2, EntityKind::Asteroid, DVec2::new(300.0, 300.0), 20.0),
            floater(3, EntityKind::Asteroid, DVec2::new(110.0, 100.0), 20.0),
        ];
        assert!(player_hits_asteroid(&player, &asteroids));

        asteroids[1].alive = false;
        assert!(!player_hits_asteroid(&player, &asteroids));

        asteroids[1].alive = true;
        player.alive = false;
        assert!(!player_hits_asteroid(&player, &asteroids));
    }

    #[test]
    fn test_laser_and_asteroid_destroy_each_other() {
        let mut projectiles = vec![floater(1, EntityKind::Laser, DVec2::ZERO, 10.0)];
        let mut asteroids = vec![
            floater(2, EntityKind::Asteroid, DVec2::new(5.0, 0.0), 10.0),
            floater(3, EntityKind::Asteroid, DVec2::new(500.0, 0.0), 10.0),
        ];
        assert_eq!(resolve_laser_hits(&mut projectiles, &mut asteroids), 1);
        assert!(!projectiles[0].alive);
        assert!(!asteroids[0].alive);
        assert!(asteroids[1].alive);
    }

    #[test]
    fn test_one_laser_can_take_several_asteroids() {
        let mut projectiles = vec![floater(1, EntityKind::Laser, DVec2::ZERO, 10.0)];
        let mut asteroids = vec![
            floater(2, EntityKind::Asteroid, DVec2::new(5.0, 0.0), 10.0),
            floater(3, EntityKind::Asteroid, DVec2::new(-5.0, 0.0), 10.0),
        ];
        assert_eq!(resolve_laser_hits(&mut projectiles, &mut asteroids), 2);
    }

    #[test]
    fn test_asteroid_destroyed_once() {
        let mut projectiles = vec![
            floater(1, EntityKind::Laser, DVec2::ZERO, 10.0),
            floater(2, EntityKind::Laser, DVec2::new(1.0, 0.0), 10.0),
        ];
        let mut asteroids = vec![floater(3, EntityKind::Asteroid, DVec2::new(5.0, 0.0), 10.0)];
        assert_eq!(resolve_laser_hits(&mut projectiles, &mut asteroids), 1);
        assert!(!projectiles[0].alive);
        // nothing left for the second laser to hit
        assert!(projectiles[1].alive);
    }

    #[test]
    fn test_debris_does_not_collide() {
        let mut projectiles = vec![floater(1, EntityKind::Debris, DVec2::ZERO, 10.0)];
        let mut asteroids = vec![floater(2, EntityKind::Asteroid, DVec2::ZERO, 10.0)];
        assert_eq!(resolve_laser_hits(&mut projectiles, &mut asteroids), 0);
        assert!(projectiles[0].alive);
        assert!(asteroids[0].alive);
    }
}
