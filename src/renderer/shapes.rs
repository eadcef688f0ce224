//! Shape generation for 2D primitives
//!
//! Everything is emitted as a flat triangle list in arena coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Glyph width relative to font size
const GLYPH_WIDTH: f32 = 0.5;
/// Segment thickness relative to font size
const GLYPH_STROKE: f32 = 0.12;
/// Horizontal advance relative to font size
const GLYPH_ADVANCE: f32 = 0.75;

/// Generate vertices for a filled rectangle
pub fn rect(rect: &Rect, color: Color) -> Vec<Vertex> {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Seven-segment masks for 0-9, bit order: top, top-right, bottom-right,
/// bottom, bottom-left, top-left, middle
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, // 0
    0b0000110, // 1
    0b1011011, // 2
    0b1001111, // 3
    0b1100110, // 4
    0b1101101, // 5
    0b1111101, // 6
    0b0000111, // 7
    0b1111111, // 8
    0b1101111, // 9
];

/// Bars of a seven-segment glyph with its top-left corner at `origin`
fn segment_rects(origin: Vec2, size: f32) -> [Rect; 7] {
    let w = size * GLYPH_WIDTH;
    let t = size * GLYPH_STROKE;
    let h = size;
    let half = h / 2.0;
    let (x, y) = (origin.x, origin.y);

    [
        Rect::new(x, y, w, t),                   // top
        Rect::new(x + w - t, y, t, half),        // top-right
        Rect::new(x + w - t, y + half, t, half), // bottom-right
        Rect::new(x, y + h - t, w, t),           // bottom
        Rect::new(x, y + half, t, half),         // bottom-left
        Rect::new(x, y, t, half),                // top-left
        Rect::new(x, y + (h - t) / 2.0, w, t),   // middle
    ]
}

/// Generate vertices for a single decimal digit
pub fn digit(value: u32, origin: Vec2, size: f32, color: Color) -> Vec<Vertex> {
    let Some(&mask) = DIGIT_SEGMENTS.get(value as usize) else {
        return Vec::new();
    };

    segment_rects(origin, size)
        .iter()
        .enumerate()
        .filter(|&(i, _)| mask & (1u8 << i) != 0)
        .flat_map(|(_, r)| rect(r, color))
        .collect()
}

/// Generate vertices for a line of text with its top-left corner at `origin`
///
/// Only digits have glyphs; any other character just advances the pen.
pub fn text(text: &str, origin: Vec2, size: f32, color: Color) -> Vec<Vertex> {
    let advance = size * GLYPH_ADVANCE;

    text.chars()
        .enumerate()
        .filter_map(|(i, c)| c.to_digit(10).map(|d| (i, d)))
        .flat_map(|(i, d)| {
            let pen = origin + Vec2::new(i as f32 * advance, 0.0);
            digit(d, pen, size, color)
        })
        .collect()
}

/// Width of `text` when drawn at `size`
pub fn text_width(text: &str, size: f32) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    (n - 1) as f32 * size * GLYPH_ADVANCE + size * GLYPH_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let r = Rect::new(10.0, 20.0, 16.0, 256.0);
        let vertices = rect(&r, WHITE);
        assert_eq!(vertices.len(), 6);
        for corner in [[10.0, 20.0], [26.0, 20.0], [10.0, 276.0], [26.0, 276.0]] {
            assert!(vertices.iter().any(|v| v.position == corner));
        }
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 50.0);
        let vertices = circle(center, 16.0, WHITE, 24);
        assert_eq!(vertices.len(), 24 * 3);
        for v in &vertices {
            let p = Vec2::from(v.position);
            assert!((p - center).length() <= 16.0 + 1e-3);
        }
    }

    #[test]
    fn test_digit_segment_counts() {
        let count = |d| digit(d, Vec2::ZERO, 32.0, WHITE).len() / 6;
        assert_eq!(count(8), 7);
        assert_eq!(count(1), 2);
        assert_eq!(count(0), 6);
        assert_eq!(count(7), 3);
        assert!(digit(10, Vec2::ZERO, 32.0, WHITE).is_empty());
    }

    #[test]
    fn test_digit_fits_its_box() {
        let origin = Vec2::new(128.0, 16.0);
        for d in 0..10 {
            for v in digit(d, origin, 32.0, WHITE) {
                assert!(v.position[0] >= 128.0 && v.position[0] <= 128.0 + 16.0 + 1e-3);
                assert!(v.position[1] >= 16.0 && v.position[1] <= 16.0 + 32.0 + 1e-3);
            }
        }
    }

    #[test]
    fn test_text_lays_out_left_to_right() {
        let vertices = text("10", Vec2::ZERO, 32.0, WHITE);
        // "1" has two bars, "0" has six
        assert_eq!(vertices.len(), (2 + 6) * 6);
        let max_x = vertices.iter().map(|v| v.position[0]).fold(0.0, f32::max);
        assert!((max_x - text_width("10", 32.0)).abs() < 1e-3);

        // Non-digits only advance
        assert!(text("fps", Vec2::ZERO, 32.0, WHITE).is_empty());
        assert_eq!(text_width("", 32.0), 0.0);
    }
}
