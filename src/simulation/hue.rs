use crate::rendering::color_from_hsv;
use macroquad::prelude::Color;

pub const FULL_TURN: f32 = 360.0;

/// Hue in degrees, stepped once per frame. Always in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCursor {
    hue: f32,
    step: f32,
}

impl HueCursor {
    pub fn new(step: f32) -> Self {
        Self { hue: 0.0, step }
    }

    pub fn value(&self) -> f32 {
        self.hue
    }

    /// Step forward, wrapping to 0 once a full turn is reached. Returns true on wrap.
    pub fn advance(&mut self) -> bool {
        let next = self.hue + self.step;
        if next >= FULL_TURN {
            self.hue = 0.0;
            true
        } else {
            self.hue = next;
            false
        }
    }

    /// Fully saturated color for the current hue, then advance.
    pub fn next_color(&mut self) -> Color {
        let color = color_from_hsv(self.hue, 1.0, 1.0);
        if self.advance() {
            log::trace!("hue wrapped");
        }
        color
    }
}
