//! Sprite image catalog
//!
//! Only image dimensions matter to the core (rotation bounds, collisions).
//! A missing or unreadable image aborts startup.

use std::path::{Path, PathBuf};

use glam::DVec2;

use crate::error::GameError;
use crate::settings::SpritePaths;
use crate::sim::SpriteSheet;

fn image_size(root: &Path, relative: &str) -> Result<DVec2, GameError> {
    let path: PathBuf = root.join(relative);
    let (w, h) = image::image_dimensions(&path).map_err(|source| GameError::Asset {
        path: path.clone(),
        source,
    })?;
    log::debug!("Loaded {} ({w}x{h})", path.display());
    Ok(DVec2::new(f64::from(w), f64::from(h)))
}

/// Read every sprite's dimensions from `root`
pub fn load_sprite_sheet(root: &Path, paths: &SpritePaths) -> Result<SpriteSheet, GameError> {
    let debris = paths
        .debris
        .iter()
        .map(|p| image_size(root, p))
        .collect::<Result<Vec<_>, _>>()?;

    let sheet = SpriteSheet {
        player: image_size(root, &paths.player)?,
        engine_fire: image_size(root, &paths.engine_fire)?,
        asteroid: image_size(root, &paths.asteroid)?,
        laser: image_size(root, &paths.laser)?,
        debris,
    };
    log::info!("Loaded {} sprite images from {}", 4 + sheet.debris.len(), root.display());
    Ok(sheet)
}
