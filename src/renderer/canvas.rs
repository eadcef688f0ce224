//! Drawing surface abstraction and the tessellating frame builder

use glam::Vec2;

use super::shapes;
use super::vertex::{Color, Vertex, colors};
use crate::sim::Rect;

/// Segments used for every filled circle
const CIRCLE_SEGMENTS: u32 = 32;

/// Immediate-mode 2D drawing in arena coordinates (origin top-left, y down)
pub trait Canvas {
    /// Discard everything drawn so far this frame and fill with `color`
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

/// A `Canvas` that turns draw calls into a triangle list for the GPU
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    vertices: Vec<Vertex>,
    clear_color: Color,
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: colors::BACKGROUND,
        }
    }

    /// Triangles accumulated since the last clear
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }
}

impl Canvas for FrameBuilder {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(shapes::rect(&rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.vertices.extend(shapes::text(text, pos, size, color));
    }
}
