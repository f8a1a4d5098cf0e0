//! Error types
//!
//! The simulation itself cannot fail. Everything here comes from the edges:
//! loading configuration, finding the host's canvas, and drawing to it.

use thiserror::Error;

/// Field configuration could not be loaded or is not playable
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid field config: {0}")]
    Invalid(String),
}

/// Fatal error while wiring the game to its host
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("canvas has no 2d context")]
    NoContext2d,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A frame could not be drawn
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("canvas error: {0}")]
    Canvas(String),
}
