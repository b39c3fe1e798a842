//! Simulation module
//!
//! Owns every piece of per-process state (integrator, hue, trail, camera) and
//! runs one frame at a time: `update` integrates and re-aims the camera,
//! `draw` describes the frame to a [`Canvas`].

pub mod hue;
pub mod time;
pub mod trajectory;

pub use hue::HueCursor;
pub use time::TimeState;
pub use trajectory::{TrajectoryError, TrajectoryPoint, TrajectoryStore};

use crate::config::{ConfigError, LorenzConfig};
use crate::physics::{LorenzParams, LorenzState};
use crate::rendering::{Canvas, OrbitCamera, GRID_SLICES, GRID_SPACING};
use macroquad::prelude::{BLACK, GREEN};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SimulationError {
    #[error("trajectory error: {0}")]
    Trajectory(#[from] TrajectoryError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub struct Simulation {
    pub config: LorenzConfig,
    params: LorenzParams,
    pub state: LorenzState,
    pub hue: HueCursor,
    pub trajectory: TrajectoryStore,
    pub camera: OrbitCamera,
    pub frame: u64,
    saturated: bool,
}

impl Simulation {
    pub fn new(config: LorenzConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self {
            params: config.params(),
            state: LorenzState::from_array(config.initial),
            hue: HueCursor::new(config.hue_step),
            trajectory: TrajectoryStore::new(config.max_points),
            camera: OrbitCamera::default(),
            frame: 0,
            saturated: false,
            config,
        })
    }

    /// Advance one frame. `dt` only drives the camera orbit; the integrator
    /// always takes a single fixed step.
    pub fn update(&mut self, dt: f32) -> Result<(), SimulationError> {
        self.camera.orbit(dt);

        self.state.euler_step(&self.params, self.config.time_step);
        let color = self.hue.next_color();
        self.frame += 1;
        let position = self.state.scaled(self.config.scale);
        self.trajectory
            .append(TrajectoryPoint::new(position, color, self.frame));
        self.trajectory.evict_overflow(self.trajectory.capacity());

        if !self.saturated && self.trajectory.len() == self.trajectory.capacity() {
            self.saturated = true;
            log::debug!(
                "trail reached {} points (frames {}..={}), evicting oldest from now on",
                self.trajectory.len(),
                self.trajectory.oldest().map_or(0, |p| p.frame),
                self.trajectory.newest().map_or(0, |p| p.frame)
            );
        }

        let aim = self.trajectory.centroid()?;
        self.camera.set_target(aim);
        Ok(())
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), SimulationError> {
        if self.trajectory.is_empty() {
            return Err(TrajectoryError::Empty.into());
        }
        canvas.clear(BLACK);
        canvas.begin_3d(&self.camera);
        canvas.draw_grid(GRID_SLICES, GRID_SPACING);
        for segment in self.trajectory.segments() {
            canvas.draw_segment(&segment);
        }
        canvas.end_3d();

        canvas.draw_text(
            &format!("Points: {}", self.trajectory.len()),
            20.0,
            40.0,
            20.0,
            GREEN,
        );
        canvas.draw_fps(20.0, 20.0);
        Ok(())
    }
}
