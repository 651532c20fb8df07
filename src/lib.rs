//! Canvas Pong - a minimal ball-and-paddle toy on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (update step, collisions, game state)
//! - `renderer`: Canvas 2D rendering (wasm32 only)
//! - `platform`: Browser bootstrap helpers (wasm32 only)
//! - `config`: Runtime-tunable parameters

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

pub use config::Config;

/// Game configuration defaults
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 200;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball radius in canvas pixels
    pub const BALL_RADIUS: f32 = 1.5;
    /// Launch speed scale (pixels per tick at magnitude 1.0)
    pub const BALL_SPEED: f32 = 1.0;

    /// Paddle dimensions in canvas pixels
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the canvas bottom edge to the paddle's top edge
    pub const PADDLE_OFFSET: f32 = 12.0;

    /// Ticks a paddle bounce stays debounced
    pub const PADDLE_COOLDOWN_TICKS: u32 = 8;
}

/// Mapping between client/display coordinates and canvas pixel space.
///
/// The paddle position is stored raw in client coordinates; collision and
/// rendering map it through this struct, accounting for the CSS-to-canvas
/// scale factor and the canvas position in the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas backing-store width in pixels
    pub width: f32,
    /// Canvas backing-store height in pixels
    pub height: f32,
    /// Client x of the canvas left edge
    pub origin_x: f32,
    /// Canvas pixels per client pixel
    pub scale_x: f32,
}

impl Viewport {
    /// Viewport for a canvas at the client origin with 1:1 scale (tests, native)
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            origin_x: 0.0,
            scale_x: 1.0,
        }
    }

    /// Viewport for a canvas positioned and scaled by CSS
    pub fn with_client_rect(width: f32, height: f32, rect_left: f32, client_width: f32) -> Self {
        let scale_x = if client_width > 0.0 {
            width / client_width
        } else {
            1.0
        };
        Self {
            width,
            height,
            origin_x: rect_left,
            scale_x,
        }
    }

    /// Map a raw client x coordinate into canvas pixel space
    #[inline]
    pub fn to_canvas_x(&self, client_x: f32) -> f32 {
        (client_x - self.origin_x) * self.scale_x
    }

    /// Client x that maps to the horizontal center of the canvas
    #[inline]
    pub fn client_center_x(&self) -> f32 {
        self.origin_x + self.width / self.scale_x / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mapping() {
        let view = Viewport::new(800.0, 600.0);
        assert_eq!(view.to_canvas_x(123.0), 123.0);
        assert_eq!(view.client_center_x(), 400.0);
    }

    #[test]
    fn test_scaled_offset_mapping() {
        // 800px backing store displayed at 400 CSS px, 100px from the left
        let view = Viewport::with_client_rect(800.0, 600.0, 100.0, 400.0);
        assert_eq!(view.scale_x, 2.0);
        assert_eq!(view.to_canvas_x(100.0), 0.0);
        assert_eq!(view.to_canvas_x(300.0), 400.0);
        assert_eq!(view.client_center_x(), 300.0);
    }

    #[test]
    fn test_zero_client_width_falls_back_to_unit_scale() {
        let view = Viewport::with_client_rect(800.0, 600.0, 0.0, 0.0);
        assert_eq!(view.scale_x, 1.0);
    }
}
