//! Paddle intents set by the keyboard
//!
//! Key handlers only write here. The next tick reads both slots once, so any
//! number of key events between two ticks collapses to the last one.

use serde::{Deserialize, Serialize};

use super::state::Side;

/// Direction a player is asking their paddle to move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleIntent {
    Up,
    #[default]
    Idle,
    Down,
}

impl PaddleIntent {
    /// Signed velocity for this intent (screen y grows downward)
    #[inline]
    pub fn velocity(self, speed: f32) -> f32 {
        match self {
            PaddleIntent::Up => -speed,
            PaddleIntent::Idle => 0.0,
            PaddleIntent::Down => speed,
        }
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: PaddleIntent,
    pub right: PaddleIntent,
}

impl InputState {
    pub fn set(&mut self, side: Side, intent: PaddleIntent) {
        match side {
            Side::Left => self.left = intent,
            Side::Right => self.right = intent,
        }
    }

    /// Handle a key press. Returns false for keys that are not bound.
    pub fn key_down(&mut self, key: &str) -> bool {
        let (side, intent) = match key {
            "w" => (Side::Left, PaddleIntent::Up),
            "s" => (Side::Left, PaddleIntent::Down),
            "ArrowUp" => (Side::Right, PaddleIntent::Up),
            "ArrowDown" => (Side::Right, PaddleIntent::Down),
            _ => return false,
        };
        self.set(side, intent);
        true
    }

    /// Handle a key release. Releasing either key of a pair stops that paddle,
    /// even if the other key of the pair is still held.
    pub fn key_up(&mut self, key: &str) -> bool {
        let side = match key {
            "w" | "s" => Side::Left,
            "ArrowUp" | "ArrowDown" => Side::Right,
            _ => return false,
        };
        self.set(side, PaddleIntent::Idle);
        true
    }
}
