//! Fixed timestep update step
//!
//! Advances the game state by exactly one tick. Deterministic: velocities are
//! in pixels per tick, so steady-state motion is `pos += vel` with no
//! floating-point time scaling.

use crate::{Config, Viewport};

use super::collision::{self, PaddleRect};
use super::state::GameState;

/// Advance the game state by one tick.
///
/// A no-op while no round is in progress. All collision checks use the
/// pre-move position; the move for the tick is committed afterwards with the
/// possibly-reflected velocity. A paddle hit suppresses the edge checks for
/// the same tick, so a ball that qualifies for both only bounces off the
/// paddle (the edge is re-checked next tick).
pub fn tick(state: &mut GameState, view: &Viewport, config: &Config) {
    if !state.started {
        return;
    }
    state.time_ticks += 1;

    if state.ball.paddle_cooldown > 0 {
        state.ball.paddle_cooldown -= 1;
    }

    let paddle = PaddleRect::from_state(state.paddle.x, view, config);
    let paddle_hit =
        !state.ball.in_cooldown() && paddle.hits_ball(state.ball.pos, config.ball_radius);

    if paddle_hit {
        state.ball.vel.y = collision::invert(state.ball.vel.y);
        state.ball.paddle_cooldown = config.paddle_cooldown_ticks;
        if config.track_score {
            state.score += 1;
        }
    } else {
        if collision::at_vertical_edge(state.ball.pos.x, config.ball_radius, view.width) {
            state.ball.vel.x = collision::invert(state.ball.vel.x);
        }
        if collision::at_top_edge(state.ball.pos.y, config.ball_radius) {
            state.ball.vel.y = collision::invert(state.ball.vel.y);
        }
        if collision::past_bottom(state.ball.pos.y, config.ball_radius, view.height) {
            state.end_round(view);
            return;
        }
    }

    state.ball.pos += state.ball.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn setup() -> (GameState, Viewport, Config) {
        let view = Viewport::new(100.0, 100.0);
        let state = GameState::new(&view);
        (state, view, Config::default())
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let (mut state, view, config) = setup();
        state.ball.pos = Vec2::new(30.0, 40.0);
        state.ball.vel = Vec2::new(2.0, 2.0);
        state.paddle.x = 60.0;
        let before = state.clone();

        tick(&mut state, &view, &config);
        assert_eq!(state, before);
    }

    #[test]
    fn test_steady_state_motion() {
        // Ball at (50,50) with velocity (2,2), canvas 100x100, no paddle in
        // range: one tick moves it to exactly (52,52).
        let (mut state, view, config) = setup();
        state.started = true;
        state.ball.pos = Vec2::new(50.0, 50.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        tick(&mut state, &view, &config);
        assert_eq!(state.ball.pos, Vec2::new(52.0, 52.0));
        assert!(state.started);
    }

    #[test]
    fn test_left_edge_reflects_then_moves_same_tick() {
        // Reflection happens before the move commits: the inverted velocity
        // applies within the same tick.
        let (mut state, view, config) = setup();
        state.started = true;
        state.ball.pos = Vec2::new(0.5, 50.0);
        state.ball.vel = Vec2::new(-1.0, 0.0);

        tick(&mut state, &view, &config);
        assert_eq!(state.ball.vel.x, 1.0);
        assert_eq!(state.ball.pos.x, 1.5);
    }

    #[test]
    fn test_two_edge_hits_restore_velocity_sign() {
        let (mut state, view, config) = setup();
        state.started = true;
        state.ball.pos = Vec2::new(0.5, 50.0);
        state.ball.vel = Vec2::new(-1.0, 0.0);

        tick(&mut state, &view, &config);
        assert_eq!(state.ball.vel.x, 1.0);

        state.ball.pos = Vec2::new(99.5, 50.0);
        tick(&mut state, &view, &config);
        assert_eq!(state.ball.vel.x, -1.0);
    }

    #[test]
    fn test_top_edge_reflects_vertical_velocity() {
        let (mut state, view, config) = setup();
        state.started = true;
        state.ball.pos = Vec2::new(50.0, 1.0);
        state.ball.vel = Vec2::new(0.0, -0.5);

        tick(&mut state, &view, &config);
        assert_eq!(state.ball.vel.y, 0.5);
    }

    #[test]
    fn test_bottom_exit_ends_round() {
        // One update step with the ball past the bottom boundary zeroes the
        // velocity and stops the round. Ball x is outside the paddle span so
        // the paddle does not intercept.
        let (mut state, view, config) = setup();
        state.started = true;
        state.ball.pos = Vec2::new(10.0, 99.5);
        state.ball.vel = Vec2::new(1.0, 1.0);

        tick(&mut state, &view, &config);
        assert!(!state.started);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_paddle_bounce_inverts_vertical_velocity() {
        let (mut state, view, config) = setup();
        state.started = true;
        // Default paddle geometry: top at y=88, span [25,75] for paddle.x=50
        state.ball.pos = Vec2::new(50.0, 87.0);
        state.ball.vel = Vec2::new(0.5, 1.0);

        tick(&mut state, &view, &config);
        assert_eq!(state.ball.vel.y, -1.0);
        assert!(state.ball.in_cooldown());
        assert_eq!(state.ball.pos, Vec2::new(50.5, 86.0));
    }

    #[test]
    fn test_cooldown_suppresses_second_paddle_bounce() {
        let (mut state, view, config) = setup();
        state.started = true;
        state.ball.pos = Vec2::new(50.0, 87.0);
        state.ball.vel = Vec2::new(0.0, 0.1);

        tick(&mut state, &view, &config);
        assert_eq!(state.ball.vel.y, -0.1);

        // Still overlapping the paddle next tick; the cooldown holds the
        // inverted velocity instead of flipping it back.
        tick(&mut state, &view, &config);
        assert_eq!(state.ball.vel.y, -0.1);
    }

    #[test]
    fn test_cooldown_expires_after_configured_ticks() {
        let (mut state, view, config) = setup();
        state.started = true;
        state.ball.pos = Vec2::new(50.0, 87.0);
        state.ball.vel = Vec2::new(0.0, 0.0);

        tick(&mut state, &view, &config);
        assert_eq!(state.ball.paddle_cooldown, config.paddle_cooldown_ticks);

        // Move the ball off the paddle so expiry doesn't immediately re-arm
        state.ball.pos = Vec2::new(50.0, 50.0);
        for _ in 0..config.paddle_cooldown_ticks {
            tick(&mut state, &view, &config);
        }
        assert!(!state.ball.in_cooldown());
    }

    #[test]
    fn test_paddle_hit_suppresses_edge_check_same_tick() {
        // Ball qualifies for both the paddle and the left edge; only the
        // paddle bounce applies this tick, the edge is handled next tick.
        let (mut state, view, config) = setup();
        state.started = true;
        state.paddle.x = 5.0; // span [-20, 30]
        state.ball.pos = Vec2::new(0.5, 90.0);
        state.ball.vel = Vec2::new(-1.0, 2.0);

        tick(&mut state, &view, &config);
        assert_eq!(state.ball.vel, Vec2::new(-1.0, -2.0));
        assert_eq!(state.ball.pos, Vec2::new(-0.5, 88.0));

        // Next tick the paddle is debounced and the edge reflects.
        tick(&mut state, &view, &config);
        assert_eq!(state.ball.vel.x, 1.0);
    }

    #[test]
    fn test_score_counts_paddle_bounces_when_enabled() {
        let (mut state, view, mut config) = setup();
        config.track_score = true;
        state.started = true;
        state.ball.pos = Vec2::new(50.0, 87.0);
        state.ball.vel = Vec2::new(0.0, 1.0);

        tick(&mut state, &view, &config);
        assert_eq!(state.score, 1);

        let mut untracked = GameState::new(&view);
        untracked.started = true;
        untracked.ball.pos = Vec2::new(50.0, 87.0);
        untracked.ball.vel = Vec2::new(0.0, 1.0);
        config.track_score = false;
        tick(&mut untracked, &view, &config);
        assert_eq!(untracked.score, 0);
    }

    proptest! {
        /// Away from every boundary and the paddle, a tick is exactly
        /// `pos += vel` and leaves the velocity untouched.
        #[test]
        fn prop_steady_state_is_pure_translation(
            x in 10.0f32..80.0,
            y in 10.0f32..80.0,
            vx in -1.0f32..1.0,
            vy in -1.0f32..1.0,
        ) {
            let (mut state, view, config) = setup();
            state.started = true;
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);

            tick(&mut state, &view, &config);
            prop_assert_eq!(state.ball.pos, Vec2::new(x + vx, y + vy));
            prop_assert_eq!(state.ball.vel, Vec2::new(vx, vy));
            prop_assert!(state.started);
        }

        /// Idle ticks never mutate ball or paddle, whatever the state holds.
        #[test]
        fn prop_idle_tick_never_mutates(
            x in -50.0f32..150.0,
            y in -50.0f32..150.0,
            vx in -2.0f32..2.0,
            vy in -2.0f32..2.0,
            paddle_x in -50.0f32..150.0,
        ) {
            let (mut state, view, config) = setup();
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);
            state.paddle.x = paddle_x;
            let before = state.clone();

            tick(&mut state, &view, &config);
            prop_assert_eq!(state, before);
        }
    }
}
