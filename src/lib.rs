//! Pingo - two-player arcade Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, goals, fixed tick)
//! - `game`: Frame orchestration (input -> tick -> render)
//! - `renderer`: Canvas abstraction, tessellation and the WebGPU pipeline
//! - `platform`: Window abstraction and the headless window
//! - `input`: Logical keys and per-player bindings
//! - `settings`: Player preferences

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, run};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Pingo";
    /// Arena (and window) dimensions in pixels
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Target frame rate; one simulation tick per frame
    pub const TARGET_FPS: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TARGET_FPS as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 256.0;
    /// Gap between the arena edge and the paddles
    pub const PADDLE_MARGIN: f32 = 32.0;
    /// Vertical movement per frame per held key
    pub const PADDLE_STEP: f32 = 8.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    /// Spawn speed is drawn from [BALL_MIN_VELOCITY, BALL_MIN_VELOCITY + BALL_VELOCITY_SPREAD)
    pub const BALL_MIN_VELOCITY: f32 = 4.0;
    pub const BALL_VELOCITY_SPREAD: f32 = 6.0;
    /// Spawn heading is normalize(1, v) with v in [-SPREAD/2, SPREAD/2)
    pub const BALL_VERTICAL_SPREAD: f32 = 5.0;
    /// Extra clearance when pushing the ball out of a paddle
    pub const PADDLE_PUSH_OUT: f32 = 1.0;

    /// HUD score placement
    pub const SCORE_INSET_X: f32 = 128.0;
    pub const SCORE_Y: f32 = 16.0;
    pub const SCORE_FONT_SIZE: f32 = 32.0;
}
