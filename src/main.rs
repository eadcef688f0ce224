//! Pingo entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use pingo::consts::*;
    use pingo::input::{InputSource, Key, KeyState};
    use pingo::platform::Window;
    use pingo::renderer::{Canvas, Color, FrameBuilder, InitError, RenderState};
    use pingo::sim::Rect;
    use pingo::{Game, Settings};

    /// Browser canvas backed by WebGPU
    struct WebWindow {
        render_state: RenderState,
        frame: FrameBuilder,
        /// Shared with the keyboard listeners
        keys: Rc<RefCell<KeyState>>,
    }

    impl Canvas for WebWindow {
        fn clear(&mut self, color: Color) {
            self.frame.clear(color);
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.frame.fill_rect(rect, color);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.frame.fill_circle(center, radius, color);
        }

        fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
            self.frame.draw_text(text, pos, size, color);
        }
    }

    impl InputSource for WebWindow {
        fn is_key_down(&self, key: Key) -> bool {
            self.keys.borrow().is_key_down(key)
        }
    }

    impl Window for WebWindow {
        fn set_target_fps(&mut self, fps: u32) {
            // requestAnimationFrame sets the display rate; the accumulator
            // steps the simulation at SIM_DT
            log::info!("Simulation rate: {} Hz", fps);
        }

        fn should_close(&self) -> bool {
            // The page owns the lifetime; closing the tab ends everything
            false
        }

        fn begin_frame(&mut self) {}

        fn end_frame(&mut self) {
            match self.render_state.render(&self.frame) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn close(&mut self) {}
    }

    /// Game instance holding all state
    struct WebGame {
        game: Game,
        window: WebWindow,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
    }

    impl WebGame {
        /// Run simulation ticks at the fixed rate, then draw once
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.game.update(&self.window);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Fell behind (tab was hidden, slow device); drop the backlog
                self.accumulator = self.accumulator.min(SIM_DT);
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.game.set_fps((60000.0 / elapsed).round() as u32);
                }
            }
        }

        fn render(&mut self) {
            self.game.render(&mut self.window);
        }
    }

    /// Size the canvas backing store to its CSS size times the pixel ratio
    fn fit_canvas(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    pub async fn run() -> Result<(), InitError> {
        log::info!("Pingo starting...");

        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoWindow)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(InitError::NoCanvas)?
            .dyn_into()
            .map_err(|_| InitError::NoCanvas)?;

        let (width, height) = fit_canvas(&window, &canvas);

        let settings = Settings::load();
        let seed = settings.seed_or(js_sys::Date::now() as u64);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        let keys = Rc::new(RefCell::new(KeyState::new()));

        let mut web_window = WebWindow {
            render_state,
            frame: FrameBuilder::new(),
            keys: keys.clone(),
        };
        web_window.set_target_fps(TARGET_FPS);

        let game = Rc::new(RefCell::new(WebGame {
            game: Game::new(&settings, seed),
            window: web_window,
            accumulator: 0.0,
            last_time: 0.0,
            frame_times: [0.0; 60],
            frame_index: 0,
        }));

        setup_input_handlers(&settings, keys);
        setup_resize_handler(canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Pingo running!");
        Ok(())
    }

    fn setup_input_handlers(settings: &Settings, keys: Rc<RefCell<KeyState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let bound = [
            settings.player_one.up,
            settings.player_one.down,
            settings.player_two.up,
            settings.player_two.down,
        ];

        // Key down
        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Ok(key) = event.key().parse::<Key>() {
                    if bound.contains(&key) {
                        // Keep arrow keys from scrolling the page
                        event.prevent_default();
                    }
                    keys.borrow_mut().press(key);
                }
            });
            listen(&window, "keydown", closure.as_ref());
            closure.forget();
        }

        // Key up
        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Ok(key) = event.key().parse::<Key>() {
                    keys.borrow_mut().release(key);
                }
            });
            listen(&window, "keyup", closure.as_ref());
            closure.forget();
        }

        // Window blur: key-up events never arrive, so release everything
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                keys.borrow_mut().clear();
                log::info!("Focus lost, released all keys");
            });
            listen(&window, "blur", closure.as_ref());
            closure.forget();
        }
    }

    /// Register `callback` for `event` on the window, logging if the browser refuses
    fn listen(window: &web_sys::Window, event: &str, callback: &JsValue) {
        if let Err(e) = window.add_event_listener_with_callback(event, callback.unchecked_ref()) {
            log::warn!("Failed to register {} listener: {:?}", event, e);
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                let (w, h) = fit_canvas(&window, &canvas);
                game.borrow_mut().window.render_state.resize(w, h);
            }
        });
        listen(&window, "resize", closure.as_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("Failed to schedule animation frame: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_game::run().await {
        log::error!("Pingo failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pingo::consts::*;
    use pingo::platform::HeadlessWindow;
    use pingo::sim::Player;
    use pingo::{Game, Settings};

    /// Length of the unattended native match
    const NATIVE_MATCH_SECONDS: u64 = 60;

    env_logger::init();
    log::info!("Pingo (native) starting...");
    log::info!(
        "Native mode has no display - running a paced {}s headless match; use `trunk serve` to play",
        NATIVE_MATCH_SECONDS
    );

    let settings = Settings::load();
    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let seed = settings.seed_or(clock_seed);

    let mut window = HeadlessWindow::new(WINDOW_TITLE, ARENA_WIDTH as u32, ARENA_HEIGHT as u32)
        .with_frame_budget(TARGET_FPS as u64 * NATIVE_MATCH_SECONDS)
        .paced();
    let mut game = Game::new(&settings, seed);

    pingo::run(&mut game, &mut window);

    let score = game.score();
    println!(
        "Final score: {} - {}",
        score.points(Player::One),
        score.points(Player::Two)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
