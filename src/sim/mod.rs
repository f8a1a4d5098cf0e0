//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{goal_scorer, hits_paddle, hits_wall};
pub use input::{InputState, PaddleIntent};
pub use state::{Ball, Paddle, ScoreBoard, Side, SimulationState, Snapshot};
pub use tick::{TickEvents, advance, tick};
