use super::{Canvas, OrbitCamera, Segment};
use macroquad::prelude::*;

/// Forwards every call to macroquad's immediate-mode API.
pub struct MacroquadCanvas;

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn begin_3d(&mut self, camera: &OrbitCamera) {
        set_camera(&camera.to_camera3d());
    }

    fn end_3d(&mut self) {
        set_default_camera();
    }

    fn draw_grid(&mut self, slices: u32, spacing: f32) {
        draw_grid(slices, spacing, GRAY, DARKGRAY);
    }

    fn draw_segment(&mut self, segment: &Segment) {
        draw_line_3d(segment.start, segment.end, segment.color);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        // macroquad anchors text at the baseline, not the top-left corner
        draw_text(text, x, y + size * 0.75, size, color);
    }

    fn draw_fps(&mut self, x: f32, y: f32) {
        self.draw_text(&format!("{} FPS", get_fps()), x, y, 20.0, LIME);
    }
}
