//! Startup errors
//!
//! The simulation itself cannot fail; everything here happens before the
//! first tick (settings, input scripts, sprite images).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to load sprite image {}: {source}", .path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed input script {}: {source}", .path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
