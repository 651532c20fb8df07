//! Collision predicates for axis-aligned geometry
//!
//! Everything here is pure and operates on canvas-pixel coordinates. The
//! paddle is a fixed-size rectangle near the bottom edge; the walls are the
//! canvas bounds themselves.

use glam::Vec2;

use crate::{Config, Viewport};

/// The paddle's collision rectangle in canvas pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleRect {
    /// Horizontal center
    pub center_x: f32,
    /// Top edge (y grows downward)
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PaddleRect {
    /// Build the paddle rectangle from the raw client-space paddle position
    pub fn from_state(paddle_x: f32, view: &Viewport, config: &Config) -> Self {
        Self {
            center_x: view.to_canvas_x(paddle_x),
            top: view.height - config.paddle_offset,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Left edge of the horizontal span
    #[inline]
    pub fn left(&self) -> f32 {
        self.center_x - self.width / 2.0
    }

    /// Right edge of the horizontal span
    #[inline]
    pub fn right(&self) -> f32 {
        self.center_x + self.width / 2.0
    }

    /// Check whether the ball overlaps the paddle.
    ///
    /// Hit = ball x within the horizontal span AND ball y within one
    /// ball-radius of the top edge or past it. No approach-direction check;
    /// the caller's cooldown prevents re-triggering.
    pub fn hits_ball(&self, ball_pos: Vec2, ball_radius: f32) -> bool {
        let in_span = self.left() <= ball_pos.x && ball_pos.x <= self.right();
        let past_top = ball_pos.y >= self.top - ball_radius;
        in_span && past_top
    }
}

/// Ball is within one radius of the left or right canvas edge
#[inline]
pub fn at_vertical_edge(x: f32, radius: f32, width: f32) -> bool {
    x < radius || x > width - radius
}

/// Ball is within one radius of the top canvas edge
#[inline]
pub fn at_top_edge(y: f32, radius: f32) -> bool {
    y < radius
}

/// Ball has exited past the bottom boundary (round over)
#[inline]
pub fn past_bottom(y: f32, radius: f32, height: f32) -> bool {
    y > height - radius
}

/// Reflect one velocity component off an axis-aligned surface
#[inline]
pub fn invert(v: f32) -> f32 {
    -v
}
