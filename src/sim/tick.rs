//! Fixed timestep simulation tick
//!
//! One call moves everything by one logical step. There is no `dt`: speeds
//! are in pixels per tick.

use serde::{Deserialize, Serialize};

use super::collision::{goal_scorer, hits_paddle, hits_wall};
use super::input::InputState;
use super::state::{Side, SimulationState};

/// What happened during a tick (for logging and HUD; never fed back in)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvents {
    /// Ball reflected off the top or bottom wall
    pub wall_bounce: bool,
    /// Ball reflected off a paddle (the last one hit, if both)
    pub paddle_hit: Option<Side>,
    /// Player who won a point; the ball has already been re-centred
    pub scored: Option<Side>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut SimulationState, input: &InputState) -> TickEvents {
    let mut events = TickEvents::default();
    let config = &state.config;

    // Paddles
    let max_y = config.paddle_max_y();
    state
        .left
        .integrate(input.left.velocity(config.paddle_speed), max_y);
    state
        .right
        .integrate(input.right.velocity(config.paddle_speed), max_y);

    // Ball
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Top/bottom walls: flip only, no push-out
    if hits_wall(ball.pos, config) {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }

    // Paddles are tested independently; each contact flips the direction
    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &state.left,
            Side::Right => &state.right,
        };
        if hits_paddle(ball.pos, paddle, side, config) {
            ball.vel.x = -ball.vel.x;
            events.paddle_hit = Some(side);
        }
    }

    // Goals
    if let Some(scorer) = goal_scorer(ball.pos, config) {
        state.score.award(scorer);
        ball.recenter(config);
        events.scored = Some(scorer);
    }

    state.ticks += 1;
    events
}

/// Pure form of [`tick`]: the state one tick after `state`
pub fn advance(state: &SimulationState, input: &InputState) -> SimulationState {
    let mut next = state.clone();
    tick(&mut next, input);
    next
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::FieldConfig;
    use crate::sim::input::PaddleIntent;

    fn state() -> SimulationState {
        SimulationState::new(FieldConfig::default())
    }

    #[test]
    fn test_first_tick_from_serve() {
        let mut state = state();
        let events = tick(&mut state, &InputState::default());

        assert_eq!(events, TickEvents::default());
        assert_eq!(state.ball.pos, Vec2::new(399.0, 199.0));
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_paddles_follow_input_and_clamp() {
        let mut state = state();
        let input = InputState {
            left: PaddleIntent::Up,
            right: PaddleIntent::Down,
        };

        tick(&mut state, &input);
        assert_eq!(state.left.y, 154.0);
        assert_eq!(state.right.y, 166.0);
        assert_eq!(state.left.velocity, -6.0);

        for _ in 0..100 {
            tick(&mut state, &input);
        }
        assert_eq!(state.left.y, 0.0);
        assert_eq!(state.right.y, 320.0);
    }

    #[test]
    fn test_top_wall_reflects_once() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 2.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        let events = tick(&mut state, &InputState::default());
        assert!(events.wall_bounce);
        // Overshoot is kept
        assert_eq!(state.ball.pos.y, -2.0);
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));

        let events = tick(&mut state, &InputState::default());
        assert!(!events.wall_bounce);
        assert_eq!(state.ball.vel.y, 4.0);
    }

    #[test]
    fn test_bottom_wall_reflects() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 387.0);
        state.ball.vel = Vec2::new(-4.0, 4.0);

        let events = tick(&mut state, &InputState::default());
        assert!(events.wall_bounce);
        assert_eq!(state.ball.vel, Vec2::new(-4.0, -4.0));
    }

    #[test]
    fn test_left_paddle_returns_ball() {
        let mut state = state();
        // Left paddle spans y 160..240
        state.ball.pos = Vec2::new(22.0, 195.0);
        state.ball.vel = Vec2::new(-4.0, 4.0);

        let events = tick(&mut state, &InputState::default());
        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert_eq!(events.scored, None);
        assert_eq!(state.ball.vel.x, 4.0);
        assert_eq!(state.ball.pos.x, 18.0);
        assert_eq!(state.score.left + state.score.right, 0);

        // Next tick moves away from the paddle without flipping again
        let events = tick(&mut state, &InputState::default());
        assert_eq!(events.paddle_hit, None);
        assert_eq!(state.ball.vel.x, 4.0);
    }

    #[test]
    fn test_right_paddle_returns_ball() {
        let mut state = state();
        state.ball.pos = Vec2::new(768.0, 195.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        let events = tick(&mut state, &InputState::default());
        assert_eq!(events.paddle_hit, Some(Side::Right));
        assert_eq!(state.ball.vel.x, -4.0);
        assert_eq!(state.score.left + state.score.right, 0);
    }

    #[test]
    fn test_ball_past_left_paddle_scores_right() {
        let mut state = state();
        let config = state.config.clone();
        state.left.y = 0.0; // Out of the way
        state.ball.pos = Vec2::new(0.0, config.height / 2.0);
        state.ball.vel = Vec2::new(-4.0, 4.0);

        let events = tick(&mut state, &InputState::default());
        assert_eq!(events.scored, Some(Side::Right));
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.pos, Vec2::new(395.0, 195.0));
        // Serve direction is the pre-reset direction flipped; vertical kept
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_goal_still_counts_when_paddle_is_level() {
        // Paddle contact and goal in the same tick: both flips apply and the
        // point is still awarded.
        let mut state = state();
        state.ball.pos = Vec2::new(0.0, 200.0);
        state.ball.vel = Vec2::new(-4.0, 4.0);

        let events = tick(&mut state, &InputState::default());
        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert_eq!(events.scored, Some(Side::Right));
        assert_eq!(state.score.right, 1);
        assert_eq!(state.ball.pos, Vec2::new(395.0, 195.0));
        assert_eq!(state.ball.vel.x, -4.0);
    }

    #[test]
    fn test_ball_past_right_paddle_scores_left() {
        let mut state = state();
        let config = state.config.clone();
        state.right.y = 0.0;
        state.ball.pos = Vec2::new(config.width - config.ball_size, config.height / 2.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        let events = tick(&mut state, &InputState::default());
        assert_eq!(events.scored, Some(Side::Left));
        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.pos, config.ball_center());
        assert_eq!(state.ball.vel, Vec2::new(-4.0, -4.0));
    }

    #[test]
    fn test_advance_leaves_input_state_untouched() {
        let start = state();
        let input = InputState {
            left: PaddleIntent::Down,
            right: PaddleIntent::Up,
        };

        let a = advance(&start, &input);
        let b = advance(&start, &input);
        assert_eq!(a, b);
        assert_eq!(start.ticks, 0);
        assert_eq!(a.ticks, 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = state();
        let mut state2 = state();

        let inputs = [
            InputState {
                left: PaddleIntent::Up,
                ..Default::default()
            },
            InputState {
                right: PaddleIntent::Down,
                ..Default::default()
            },
            InputState::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            let e1 = tick(&mut state1, input);
            let e2 = tick(&mut state2, input);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1, state2);
    }
}
