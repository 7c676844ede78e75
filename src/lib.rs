//! Flick Arena - an interactive 2D physics playground
//!
//! Balls are flicked into a bounded arena containing movable rectangular
//! obstacles; they fall under gravity, bounce off the walls and obstacles
//! with energy loss, and leave a fading trail.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, per-frame stepping, collisions)
//! - `gesture`: Flick gesture resolution for the host input layer
//!
//! The host owns the loop: translate input into `sim` mutator calls, call
//! [`sim::step`] once per rendered frame with the elapsed time and arena
//! bounds, then read the entity lists to draw.

pub mod gesture;
pub mod sim;

pub use sim::{Bounds, PlaygroundConfig, PlaygroundState};

use glam::Vec2;

/// Playground configuration constants
pub mod consts {
    /// Fixed simulation timestep for hosts that drive a fixed-step loop (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward gravity (px/s², screen y grows downward)
    pub const GRAVITY: f32 = 500.0;
    /// Fraction of velocity a reflected component keeps on a bounce
    pub const BOUNCE_FACTOR: f32 = 0.7;
    /// Extra horizontal damping applied on floor bounces
    pub const GROUND_DRAG: f32 = 0.98;

    /// Ball radius (px)
    pub const BALL_RADIUS: f32 = 10.0;

    /// Launch speed clamp range (px/s)
    pub const MIN_LAUNCH_SPEED: f32 = 200.0;
    pub const MAX_LAUNCH_SPEED: f32 = 2200.0;

    /// Trail samples kept per ball
    pub const TAIL_LENGTH: usize = 50;
}

/// Convert a launch angle and speed into a screen-space velocity.
///
/// Screen y grows downward, so a positive angle launches upward.
#[inline]
pub fn launch_velocity(angle_rad: f32, speed: f32) -> Vec2 {
    Vec2::new(angle_rad.cos() * speed, -angle_rad.sin() * speed)
}
