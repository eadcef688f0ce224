//! Headless window: renders into memory, takes scripted input

use std::time::{Duration, Instant};

use glam::Vec2;

use super::Window;
use crate::input::{InputSource, Key, KeyState};
use crate::renderer::{Canvas, Color, FrameBuilder};
use crate::sim::Rect;

/// A window with no display
///
/// Frames are tessellated into a `FrameBuilder` exactly as for the GPU, so draw
/// output can be inspected. Close is requested after an optional frame budget
/// or explicitly. A paced window holds each frame to `1 / target_fps`; an
/// unpaced one presents as fast as it is driven.
#[derive(Debug)]
pub struct HeadlessWindow {
    title: String,
    target_fps: u32,
    paced: bool,
    last_present: Option<Instant>,
    frame: FrameBuilder,
    keys: KeyState,
    /// Text drawn during the current/last frame
    texts: Vec<String>,
    frame_budget: Option<u64>,
    frames_drawn: u64,
    close_requested: bool,
    closed: bool,
}

impl HeadlessWindow {
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        log::info!("Opening headless window '{}' ({}x{})", title, width, height);
        Self {
            title: title.to_string(),
            target_fps: 0,
            paced: false,
            last_present: None,
            frame: FrameBuilder::new(),
            keys: KeyState::new(),
            texts: Vec::new(),
            frame_budget: None,
            frames_drawn: 0,
            close_requested: false,
            closed: false,
        }
    }

    /// Request close once `frames` frames have been presented
    pub fn with_frame_budget(mut self, frames: u64) -> Self {
        self.frame_budget = Some(frames);
        self
    }

    /// Sleep off the rest of each frame so frames are presented at the target rate
    pub fn paced(mut self) -> Self {
        self.paced = true;
        self
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Scripted keyboard
    pub fn keys_mut(&mut self) -> &mut KeyState {
        &mut self.keys
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Output of the most recent frame
    pub fn last_frame(&self) -> &FrameBuilder {
        &self.frame
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Canvas for HeadlessWindow {
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
        self.texts.push(text.to_string());
        self.frame.draw_text(text, pos, size, color);
    }
}

impl InputSource for HeadlessWindow {
    fn is_key_down(&self, key: Key) -> bool {
        self.keys.is_key_down(key)
    }
}

impl Window for HeadlessWindow {
    fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps;
    }

    fn should_close(&self) -> bool {
        self.close_requested
            || self
                .frame_budget
                .is_some_and(|budget| self.frames_drawn >= budget)
    }

    fn begin_frame(&mut self) {
        self.texts.clear();
    }

    fn end_frame(&mut self) {
        if self.paced && self.target_fps > 0 {
            let frame_time = Duration::from_secs_f64(1.0 / self.target_fps as f64);
            if let Some(last) = self.last_present {
                let spent = last.elapsed();
                if spent < frame_time {
                    std::thread::sleep(frame_time - spent);
                }
            }
            self.last_present = Some(Instant::now());
        }

        self.frames_drawn += 1;
        log::trace!(
            "frame {}: {} vertices",
            self.frames_drawn,
            self.frame.vertices().len()
        );
    }

    fn close(&mut self) {
        if !self.closed {
            log::info!("Closing '{}' after {} frames", self.title, self.frames_drawn);
            self.closed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget_requests_close() {
        let mut window = HeadlessWindow::new("test", 64, 64).with_frame_budget(2);
        assert!(!window.should_close());

        for _ in 0..2 {
            window.begin_frame();
            window.end_frame();
        }
        assert!(window.should_close());
        assert_eq!(window.frames_drawn(), 2);
    }

    #[test]
    fn test_paced_frames_hold_target_rate() {
        let mut window = HeadlessWindow::new("test", 64, 64).paced();
        window.set_target_fps(100);

        let start = Instant::now();
        for _ in 0..5 {
            window.begin_frame();
            window.end_frame();
        }
        // Four full frame intervals between the first and last present
        assert!(start.elapsed() >= Duration::from_millis(40));
        assert_eq!(window.frames_drawn(), 5);
    }

    #[test]
    fn test_unpaced_frames_do_not_wait() {
        let mut window = HeadlessWindow::new("test", 64, 64);
        window.set_target_fps(1);

        let start = Instant::now();
        for _ in 0..3 {
            window.begin_frame();
            window.end_frame();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_explicit_close_request() {
        let mut window = HeadlessWindow::new("test", 64, 64);
        assert!(!window.should_close());
        window.request_close();
        assert!(window.should_close());

        window.close();
        assert!(window.is_closed());
    }

    #[test]
    fn test_texts_reset_per_frame() {
        let mut window = HeadlessWindow::new("test", 64, 64);
        window.begin_frame();
        window.draw_text("3", Vec2::ZERO, 32.0, [1.0; 4]);
        window.end_frame();
        assert_eq!(window.texts(), ["3".to_string()]);

        window.begin_frame();
        assert!(window.texts().is_empty());
    }

    #[test]
    fn test_scripted_keys() {
        let mut window = HeadlessWindow::new("test", 64, 64);
        window.keys_mut().press(Key::ArrowUp);
        assert!(window.is_key_down(Key::ArrowUp));
        assert!(!window.is_key_down(Key::ArrowDown));
    }
}
