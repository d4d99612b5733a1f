//! Oriented sprites and their screen-space bounds
//!
//! A sprite is drawn rotated by its entity's direction; its collision box is
//! the axis-aligned bounding box of that rotated image, centered on the
//! entity position. Collisions are box-vs-box, not pixel-perfect.

use glam::DVec2;

/// Which source image a sprite is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteImage {
    Player,
    EngineFire,
    Asteroid,
    Laser,
    /// Index into the debris image list
    Debris(usize),
}

/// Source image sizes, as loaded by the rendering collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    pub player: DVec2,
    pub engine_fire: DVec2,
    pub asteroid: DVec2,
    pub laser: DVec2,
    pub debris: Vec<DVec2>,
}

impl SpriteSheet {
    /// Build a sheet from known sizes (no image files involved)
    pub fn from_sizes(
        player: (f64, f64),
        engine_fire: (f64, f64),
        asteroid: (f64, f64),
        laser: (f64, f64),
        debris: &[(f64, f64)],
    ) -> Self {
        let v = |(w, h): (f64, f64)| DVec2::new(w, h);
        Self {
            player: v(player),
            engine_fire: v(engine_fire),
            asteroid: v(asteroid),
            laser: v(laser),
            debris: debris.iter().copied().map(v).collect(),
        }
    }

    pub fn size(&self, image: SpriteImage) -> DVec2 {
        match image {
            SpriteImage::Player => self.player,
            SpriteImage::EngineFire => self.engine_fire,
            SpriteImage::Asteroid => self.asteroid,
            SpriteImage::Laser => self.laser,
            SpriteImage::Debris(i) => self.debris.get(i).copied().unwrap_or(DVec2::ZERO),
        }
    }

    pub fn debris_count(&self) -> usize {
        self.debris.len()
    }
}

/// Axis-aligned rectangle in screen space (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn from_center(center: DVec2, size: DVec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Overlap with positive area (touching edges do not count)
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Bounding box size of a `size` image rotated by `degrees`
pub fn rotated_extent(size: DVec2, degrees: f64) -> DVec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    DVec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

/// A renderable oriented sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub image: SpriteImage,
    /// Unrotated image size
    pub source_size: DVec2,
    /// Rotation the image is drawn with (degrees)
    pub rotation: f64,
    /// Rotated bounds centered on the owner's position
    pub rect: Rect,
}

impl Sprite {
    pub fn new(image: SpriteImage, source_size: DVec2, pos: DVec2, direction: f64) -> Self {
        let mut sprite = Self {
            image,
            source_size,
            rotation: direction,
            rect: Rect::from_center(pos, source_size),
        };
        sprite.refresh(pos, direction);
        sprite
    }

    /// Re-rotate at `direction` and re-center the bounds on `pos`
    pub fn refresh(&mut self, pos: DVec2, direction: f64) {
        self.rotation = direction;
        self.rect = Rect::from_center(pos, rotated_extent(self.source_size, direction));
    }
}
