//! Duel Pong - A two-player keyboard Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `game_loop`: Frame scheduling and start/stop/reset lifecycle
//! - `renderer`: Render collaborators (log output natively, 2D canvas on the web)
//! - `config`: Field geometry, overridable from JSON

pub mod config;
pub mod error;
pub mod game_loop;
pub mod renderer;
pub mod sim;

pub use config::FieldConfig;
pub use error::{ConfigError, RenderError, SetupError};
pub use game_loop::{FixedStepScheduler, GameLoop, LoopState, Scheduler};
pub use renderer::Renderer;

/// Default field geometry
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a side wall and the outer face of its paddle
    pub const PADDLE_INSET: f32 = 10.0;
    /// Pixels per tick while a key is held
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults (square side, pixels per tick on each axis)
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 4.0;
    pub const BALL_SPEED_Y: f32 = 4.0;

    /// Frame interval of the headless scheduler (60 Hz, like a typical display)
    pub const FRAME_INTERVAL_SECS: f64 = 1.0 / 60.0;
}
