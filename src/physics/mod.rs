//! Physics module for the Lorenz system
//!
//! Holds the equations and the integrator state. Nothing here knows about
//! windows, colors or cameras.

pub mod lorenz;

pub use lorenz::{LorenzParams, LorenzState};
