//! Rendering module
//!
//! The frame is described through [`Canvas`] so the simulation never calls
//! the graphics library directly. `MacroquadCanvas` is the on-screen backend.

pub mod camera;
pub mod canvas;
pub mod color;

pub use camera::OrbitCamera;
pub use canvas::MacroquadCanvas;
pub use color::color_from_hsv;

use macroquad::prelude::{Color, Vec3};

/// Reference grid drawn under the trail.
pub const GRID_SLICES: u32 = 10;
pub const GRID_SPACING: f32 = 1.0;

/// One line of the trail, colored by its end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

/// Drawing primitives one frame needs.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn begin_3d(&mut self, camera: &OrbitCamera);
    fn end_3d(&mut self);
    fn draw_grid(&mut self, slices: u32, spacing: f32);
    fn draw_segment(&mut self, segment: &Segment);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
    /// Frame-rate readout at the given screen position.
    fn draw_fps(&mut self, x: f32, y: f32);
}
