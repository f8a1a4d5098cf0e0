//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `SimulationState`. Renderers
//! only ever see a `Snapshot`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;

/// Which player / which side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A paddle (only moves vertically)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge
    pub y: f32,
    /// Applied on the last tick: -speed, 0 or +speed
    pub velocity: f32,
}

impl Paddle {
    /// Paddle centred vertically, at rest
    pub fn centered(config: &FieldConfig) -> Self {
        Self {
            y: config.paddle_center_y(),
            velocity: 0.0,
        }
    }

    /// Apply velocity, clamped so the paddle stays on the field. The top
    /// wall wins if `max_y` is negative (paddle taller than the field).
    pub fn integrate(&mut self, velocity: f32, max_y: f32) {
        self.velocity = velocity;
        self.y = (self.y + velocity).min(max_y).max(0.0);
    }
}

/// The ball (axis-aligned square)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at field centre with the serve velocity
    pub fn serve(config: &FieldConfig) -> Self {
        Self {
            pos: config.ball_center(),
            vel: config.serve_velocity(),
        }
    }

    /// Put the ball back in the middle after a point. Horizontal direction
    /// flips from whatever it was; vertical speed is left alone.
    pub fn recenter(&mut self, config: &FieldConfig) {
        self.pos = config.ball_center();
        self.vel.x = -self.vel.x;
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub left: u32,
    pub right: u32,
}

impl ScoreBoard {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Field geometry, fixed for the session
    pub config: FieldConfig,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: ScoreBoard,
    /// Simulation tick counter
    pub ticks: u64,
}

impl SimulationState {
    /// Paddles centred, ball served from the middle, score 0-0
    pub fn new(config: FieldConfig) -> Self {
        Self {
            left: Paddle::centered(&config),
            right: Paddle::centered(&config),
            ball: Ball::serve(&config),
            score: ScoreBoard::default(),
            ticks: 0,
            config,
        }
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot {
        let c = &self.config;
        Snapshot {
            width: c.width,
            height: c.height,
            paddle_width: c.paddle_width,
            paddle_height: c.paddle_height,
            ball_size: c.ball_size,
            left_paddle: Vec2::new(c.left_paddle_x(), self.left.y),
            right_paddle: Vec2::new(c.right_paddle_x(), self.right.y),
            ball: self.ball.pos,
            score_left: self.score.left,
            score_right: self.score.right,
            tick: self.ticks,
        }
    }
}

/// What a renderer needs to paint one frame (all positions are top-left corners)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub ball: Vec2,
    pub score_left: u32,
    pub score_right: u32,
    pub tick: u64,
}
