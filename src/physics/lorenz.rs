use macroquad::prelude::{vec3, Vec3};

/// Coefficients of the Lorenz equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

/// Current point on the attractor, in the system's own coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LorenzState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }

    // Equations
    pub fn derivatives(&self, params: &LorenzParams) -> [f64; 3] {
        let dx = params.sigma * (self.y - self.x);
        let dy = self.x * (params.rho - self.z) - self.y;
        let dz = self.x * self.y - params.beta * self.z;
        [dx, dy, dz]
    }

    /// Explicit forward Euler step, in place.
    pub fn euler_step(&mut self, params: &LorenzParams, dt: f64) {
        let [dx, dy, dz] = self.derivatives(params);
        self.x += dx * dt;
        self.y += dy * dt;
        self.z += dz * dt;
    }

    /// Position in world units for drawing.
    pub fn scaled(&self, scale: f32) -> Vec3 {
        vec3(self.x as f32, self.y as f32, self.z as f32) * scale
    }
}
