//! Rendering module
//!
//! Game code draws through the `Canvas` trait. `FrameBuilder` tessellates those
//! calls into triangles and `RenderState` presents them with WebGPU.

pub mod canvas;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, FrameBuilder};
pub use pipeline::{InitError, RenderState, arena_to_ndc};
pub use vertex::{Color, Vertex, colors};
