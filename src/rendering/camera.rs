use macroquad::prelude::{vec3, Camera3D, Projection, Quat, Vec3};

/// Radians per second around the world up axis.
pub const ORBIT_SPEED: f32 = 0.5;
pub const FOV_Y_DEGREES: f32 = 90.0;

/// Perspective camera that circles its target on its own. The target is
/// re-aimed every frame; the orbit keeps whatever offset the camera had.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(vec3(100.0, 50.0, 0.0), vec3(0.0, 0.0, 80.0))
    }
}

impl OrbitCamera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: FOV_Y_DEGREES.to_radians(),
            speed: ORBIT_SPEED,
        }
    }

    pub fn orbit(&mut self, dt: f32) {
        let offset = self.position - self.target;
        let rotated = Quat::from_rotation_y(self.speed * dt) * offset;
        self.position = self.target + rotated;
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position,
            target: self.target,
            up: self.up,
            fovy: self.fov_y,
            projection: Projection::Perspective,
            ..Default::default()
        }
    }
}
