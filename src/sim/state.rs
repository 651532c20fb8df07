//! Game state and core simulation types

use glam::Vec2;
use rand::Rng;

use crate::{Config, Viewport};

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Position in canvas pixels
    pub pos: Vec2,
    /// Velocity in canvas pixels per tick
    pub vel: Vec2,
    /// Cooldown ticks before the paddle can be hit again (prevents a
    /// double bounce across adjacent ticks)
    pub paddle_cooldown: u32,
}

impl Ball {
    /// Ball at rest in the canvas center
    pub fn centered(view: &Viewport) -> Self {
        Self {
            pos: Vec2::new(view.width / 2.0, view.height / 2.0),
            vel: Vec2::ZERO,
            paddle_cooldown: 0,
        }
    }

    /// Whether the paddle-bounce debounce window is open
    #[inline]
    pub fn in_cooldown(&self) -> bool {
        self.paddle_cooldown > 0
    }
}

/// The player's paddle.
///
/// `x` is the raw pointer coordinate in client space, unclamped and
/// unvalidated; collision and rendering map it into canvas pixels through
/// [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
}

/// Complete game state, owned by the loop driver and mutated in place
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// A round is in progress; the update step is a no-op otherwise
    pub started: bool,
    /// Paddle bounces this round (only counted when `Config::track_score`)
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
}

impl GameState {
    /// Default state: ball centered at rest, paddle at the client center
    pub fn new(view: &Viewport) -> Self {
        Self {
            started: false,
            score: 0,
            time_ticks: 0,
            ball: Ball::centered(view),
            paddle: Paddle {
                x: view.client_center_x(),
            },
        }
    }

    /// Start gesture: launch the ball with a random velocity.
    ///
    /// No-op if a round is already in progress. Each velocity axis gets an
    /// independent non-zero magnitude and sign; a zero magnitude draw is
    /// rejected and redrawn.
    pub fn launch<R: Rng>(&mut self, rng: &mut R, config: &Config) {
        if self.started {
            return;
        }
        self.score = 0;
        self.ball.vel = Vec2::new(
            random_velocity_component(rng, config.ball_speed),
            random_velocity_component(rng, config.ball_speed),
        );
        self.started = true;
        log::info!("Launched with velocity {:?}", self.ball.vel);
    }

    /// Round over: the ball exited past the bottom boundary.
    ///
    /// Zeroes velocity, recenters the ball, clears the cooldown, and stops
    /// the round. Paddle position and score persist until the next launch.
    pub fn end_round(&mut self, view: &Viewport) {
        self.started = false;
        self.ball = Ball::centered(view);
        log::info!(
            "Round over at tick {} (score {})",
            self.time_ticks,
            self.score
        );
    }
}

/// Draw one signed velocity component with non-zero magnitude in (0, scale]
fn random_velocity_component<R: Rng>(rng: &mut R, scale: f32) -> f32 {
    let mut magnitude = 0.0;
    while magnitude == 0.0 {
        magnitude = rng.random_range(0.0..1.0f32);
    }
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    sign * magnitude * scale
}
