//! Simulation constants.
//!
//! Everything tunable lives here and is fixed before the frame loop starts.
//! There is no runtime parsing; pick a preset and rebuild.

use crate::physics::LorenzParams;

// ---------------------------------------------------------------------------
// Window / Frame Pacing
// ---------------------------------------------------------------------------
pub const WINDOW_WIDTH: u32 = 1920;
pub const WINDOW_HEIGHT: u32 = 1080;
pub const TARGET_FPS: u32 = 0; // 0 = uncapped

// ---------------------------------------------------------------------------
// Lorenz System
// ---------------------------------------------------------------------------
pub const SIGMA: f64 = 19.0;
pub const RHO: f64 = 28.0;
pub const BETA: f64 = 8.0 / 3.0;
pub const TIME_STEP: f64 = 0.001; // larger = faster drawing, coarser points
pub const INITIAL_STATE: [f64; 3] = [1.0, 1.0, 1.0];

// ---------------------------------------------------------------------------
// Trail
// ---------------------------------------------------------------------------
pub const SCALE: f32 = 3.0;
pub const HUE_STEP: f32 = 0.003; // degrees per frame
pub const MAX_POINTS: usize = 20_000;

/// Which constant set the binary runs with.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Original,
    Classic,
}

pub const ACTIVE_PRESET: Preset = Preset::Original;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("time step must be finite and positive, got {0}")]
    NonPositiveStep(f64),
    #[error("trail capacity must hold at least one point")]
    ZeroCapacity,
    #[error("hue step must lie in (0, 360), got {0}")]
    InvalidHueIncrement(f32),
    #[error("{0} must be finite")]
    NonFiniteValue(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzConfig {
    pub name: &'static str,
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
    pub time_step: f64,
    pub initial: [f64; 3],
    pub scale: f32,
    pub hue_step: f32,
    pub max_points: usize,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
}

impl Default for LorenzConfig {
    fn default() -> Self {
        Self {
            name: "original",
            sigma: SIGMA,
            rho: RHO,
            beta: BETA,
            time_step: TIME_STEP,
            initial: INITIAL_STATE,
            scale: SCALE,
            hue_step: HUE_STEP,
            max_points: MAX_POINTS,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            target_fps: TARGET_FPS,
        }
    }
}

impl LorenzConfig {
    /// Textbook parameters (σ = 10) with a coarser step so the wings fill in faster.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            sigma: 10.0,
            time_step: 0.002,
            hue_step: 0.005,
            ..Self::default()
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Original => Self::default(),
            Preset::Classic => Self::classic(),
        }
    }

    pub fn params(&self) -> LorenzParams {
        LorenzParams {
            sigma: self.sigma,
            rho: self.rho,
            beta: self.beta,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.time_step));
        }
        if self.max_points == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.hue_step.is_finite() || self.hue_step <= 0.0 || self.hue_step >= 360.0 {
            return Err(ConfigError::InvalidHueIncrement(self.hue_step));
        }
        let named = [
            ("sigma", self.sigma),
            ("rho", self.rho),
            ("beta", self.beta),
            ("scale", self.scale as f64),
            ("initial x", self.initial[0]),
            ("initial y", self.initial[1]),
            ("initial z", self.initial[2]),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue(name));
            }
        }
        Ok(())
    }
}
