//! Platform abstraction layer
//!
//! A `Window` is the outer collaborator the game loop runs against: it draws
//! (`Canvas`), reports held keys (`InputSource`), paces frames and signals when
//! the player wants to quit.
//! - `headless`: in-memory window for the native binary and tests
//! - the browser window lives in the wasm entry point

pub mod headless;

pub use headless::HeadlessWindow;

use crate::input::InputSource;
use crate::renderer::Canvas;

/// Window/display collaborator driven by the game loop
pub trait Window: Canvas + InputSource {
    /// Frame pacing target; pacing itself is up to the window
    fn set_target_fps(&mut self, fps: u32);
    /// Checked once at the start of every loop iteration
    fn should_close(&self) -> bool;
    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    /// Tear down after the loop exits
    fn close(&mut self);
}
