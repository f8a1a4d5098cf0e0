//! Contact tests for an axis-aligned ball against the walls and paddles
//!
//! All tests are "touching or past" checks on the post-move position. None of
//! them push the ball back out, so a fast ball may sit slightly inside a wall
//! or paddle for the tick in which it reflects.

use glam::Vec2;

use super::state::{Paddle, Side};
use crate::config::FieldConfig;

/// Ball touches or overlaps the top or bottom wall
#[inline]
pub fn hits_wall(ball_pos: Vec2, config: &FieldConfig) -> bool {
    ball_pos.y <= 0.0 || ball_pos.y + config.ball_size >= config.height
}

/// Ball is vertically within the paddle's extent (open interval on both ends)
#[inline]
fn overlaps_vertically(ball_pos: Vec2, paddle: &Paddle, config: &FieldConfig) -> bool {
    ball_pos.y + config.ball_size > paddle.y && ball_pos.y < paddle.y + config.paddle_height
}

/// Ball has reached the face of the given side's paddle while level with it
pub fn hits_paddle(ball_pos: Vec2, paddle: &Paddle, side: Side, config: &FieldConfig) -> bool {
    let reached_face = match side {
        Side::Left => ball_pos.x <= config.left_paddle_x() + config.paddle_width,
        Side::Right => ball_pos.x + config.ball_size >= config.right_paddle_x(),
    };
    reached_face && overlaps_vertically(ball_pos, paddle, config)
}

/// Which player (if any) wins the point for this ball position. The left goal
/// is checked first; both cannot be true on a playable field.
pub fn goal_scorer(ball_pos: Vec2, config: &FieldConfig) -> Option<Side> {
    if ball_pos.x <= 0.0 {
        Some(Side::Right)
    } else if ball_pos.x + config.ball_size >= config.width {
        Some(Side::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(y: f32) -> Paddle {
        Paddle { y, velocity: 0.0 }
    }

    #[test]
    fn test_wall_contact_edges() {
        let config = FieldConfig::default();
        assert!(hits_wall(Vec2::new(100.0, 0.0), &config));
        assert!(hits_wall(Vec2::new(100.0, -3.0), &config));
        assert!(hits_wall(Vec2::new(100.0, 390.0), &config));
        assert!(!hits_wall(Vec2::new(100.0, 0.5), &config));
        assert!(!hits_wall(Vec2::new(100.0, 389.5), &config));
    }

    #[test]
    fn test_left_paddle_contact() {
        let config = FieldConfig::default();
        let paddle = paddle_at(100.0);

        // At the face line, level with the paddle
        assert!(hits_paddle(Vec2::new(20.0, 150.0), &paddle, Side::Left, &config));
        // One pixel short of the face
        assert!(!hits_paddle(Vec2::new(20.5, 150.0), &paddle, Side::Left, &config));
        // Ball bottom exactly at paddle top does not count
        assert!(!hits_paddle(Vec2::new(18.0, 90.0), &paddle, Side::Left, &config));
        // Ball top exactly at paddle bottom does not count
        assert!(!hits_paddle(Vec2::new(18.0, 180.0), &paddle, Side::Left, &config));
        // Grazing the top corner counts
        assert!(hits_paddle(Vec2::new(18.0, 91.0), &paddle, Side::Left, &config));
    }

    #[test]
    fn test_right_paddle_contact() {
        let config = FieldConfig::default();
        let paddle = paddle_at(100.0);

        assert!(hits_paddle(Vec2::new(770.0, 150.0), &paddle, Side::Right, &config));
        assert!(!hits_paddle(Vec2::new(769.0, 150.0), &paddle, Side::Right, &config));
        assert!(!hits_paddle(Vec2::new(775.0, 300.0), &paddle, Side::Right, &config));
    }

    #[test]
    fn test_goal_lines() {
        let config = FieldConfig::default();
        assert_eq!(goal_scorer(Vec2::new(0.0, 200.0), &config), Some(Side::Right));
        assert_eq!(goal_scorer(Vec2::new(790.0, 200.0), &config), Some(Side::Left));
        assert_eq!(goal_scorer(Vec2::new(400.0, 200.0), &config), None);
        assert_eq!(goal_scorer(Vec2::new(0.1, 200.0), &config), None);
    }
}
