//! Deterministic playground simulation
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Timestep supplied by the host, never read from a clock
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod step;

pub use collision::{Edge, ball_obstacle_overlap, nearest_edge};
pub use state::{Ball, Bounds, Obstacle, ObstacleId, PlaygroundConfig, PlaygroundState};
pub use step::step;
