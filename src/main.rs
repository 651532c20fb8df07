//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use canvas_pong::consts::MAX_SUBSTEPS;
    use canvas_pong::renderer::Renderer;
    use canvas_pong::sim::{GameState, tick};
    use canvas_pong::{Config, Viewport, platform};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Renderer,
        canvas: HtmlCanvasElement,
        view: Viewport,
        config: Config,
        rng: Pcg32,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Run due simulation ticks for this frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let tick_dt = self.config.tick_dt();
            let mut substeps = 0;
            while self.accumulator >= tick_dt && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.view, &self.config);
                self.accumulator -= tick_dt;
                substeps += 1;
            }
        }

        /// Start gesture; `launch` itself no-ops while a round is running
        fn start(&mut self) {
            self.state.launch(&mut self.rng, &self.config);
        }

        /// Render the current frame
        fn render(&self) {
            if let Err(err) = self.renderer.draw(&self.state, &self.view, &self.config) {
                log::warn!("Render error: {err:?}");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        // Fatal startup preconditions: canvas and 2D context must exist
        let canvas = platform::canvas();
        platform::size_backing_store(&canvas);
        let ctx = platform::context_2d(&canvas);

        let config = Config::from_json_override(platform::config_override(&canvas).as_deref());
        let view = platform::viewport(&canvas);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(&view),
            renderer: Renderer::new(ctx),
            canvas,
            view,
            config,
            rng: Pcg32::seed_from_u64(seed),
            accumulator: 0.0,
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {seed}");

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = platform::window();
        let canvas = game.borrow().canvas.clone();

        // Mouse move - raw client x, unconditional overwrite
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().state.paddle.x = event.client_x() as f32;
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click - start gesture
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().start();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - paddle follows the first touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().state.paddle.x = touch.client_x() as f32;
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - position the paddle, then start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if let Some(touch) = event.touches().get(0) {
                    g.state.paddle.x = touch.client_x() as f32;
                }
                g.start();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard - space/enter start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.key().as_str() {
                    " " | "Enter" => game.borrow_mut().start(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = platform::window();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // The frame callback is never cancelled; idle frames run the update step
    // as a no-op and just redraw.
    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // The canvas may have moved or rescaled since last frame
            let view = platform::viewport(&g.canvas);
            g.view = view;

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                g.config.tick_dt()
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::sim::{GameState, tick};
    use canvas_pong::{Config, Viewport};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Canvas Pong (native) starting headless demo...");

    let view = Viewport::new(800.0, 600.0);
    let mut config = Config::default();
    config.track_score = true;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new(&view);
    state.launch(&mut rng, &config);

    // Five simulated seconds with the paddle shadowing the ball
    let ticks = 5 * config.tick_hz;
    for _ in 0..ticks {
        state.paddle.x = state.ball.pos.x;
        tick(&mut state, &view, &config);
        if !state.started {
            state.launch(&mut rng, &config);
        }
    }

    log::info!(
        "Demo done: {} ticks, ball at {:?}, score {}",
        state.time_ticks,
        state.ball.pos,
        state.score
    );
}
