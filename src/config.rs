//! Runtime-tunable game parameters
//!
//! Defaults come from `consts`; on the web an optional JSON object in the
//! canvas element's `data-config` attribute can override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulation rate (ticks per second)
    pub tick_hz: u32,
    /// Ball radius in canvas pixels
    pub ball_radius: f32,
    /// Launch speed scale (pixels per tick at magnitude 1.0)
    pub ball_speed: f32,
    /// Paddle width in canvas pixels
    pub paddle_width: f32,
    /// Paddle height in canvas pixels
    pub paddle_height: f32,
    /// Distance from the canvas bottom edge to the paddle's top edge
    pub paddle_offset: f32,
    /// Ticks a paddle bounce stays debounced
    pub paddle_cooldown_ticks: u32,
    /// Count paddle bounces into `GameState::score`
    pub track_score: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_hz: consts::TICK_HZ,
            ball_radius: consts::BALL_RADIUS,
            ball_speed: consts::BALL_SPEED,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            paddle_offset: consts::PADDLE_OFFSET,
            paddle_cooldown_ticks: consts::PADDLE_COOLDOWN_TICKS,
            track_score: false,
        }
    }
}

impl Config {
    /// Parse a JSON override object; `None` leaves the defaults untouched.
    ///
    /// A malformed override is not fatal: it is logged and ignored.
    pub fn from_json_override(json: Option<&str>) -> Self {
        match json {
            Some(json) => match serde_json::from_str(json) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("Invalid config override, using defaults: {err}");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Seconds per simulation tick
    #[inline]
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }
}
