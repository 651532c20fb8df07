//! Canvas 2D renderer
//!
//! Immediate-mode drawing: each frame fills the background, then draws the
//! ball and paddle from the current state. Pure read of the game state; the
//! only side effect is pixels on the canvas.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::sim::{GameState, PaddleRect};
use crate::{Config, Viewport};

const BACKGROUND_COLOR: &str = "#000";
const BALL_COLOR: &str = "#fff";
const PADDLE_COLOR: &str = "#e5dcdc";

/// Draws the game onto a 2D canvas context
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Draw one frame: background, ball, paddle
    pub fn draw(
        &self,
        state: &GameState,
        view: &Viewport,
        config: &Config,
    ) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(BACKGROUND_COLOR);
        self.ctx
            .fill_rect(0.0, 0.0, view.width as f64, view.height as f64);

        self.ctx.begin_path();
        self.ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            config.ball_radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.set_fill_style_str(BALL_COLOR);
        self.ctx.fill();
        self.ctx.close_path();

        let paddle = PaddleRect::from_state(state.paddle.x, view, config);
        self.ctx.set_fill_style_str(PADDLE_COLOR);
        self.ctx.fill_rect(
            paddle.left() as f64,
            paddle.top as f64,
            paddle.width as f64,
            paddle.height as f64,
        );

        Ok(())
    }
}
