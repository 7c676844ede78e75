//! Playground state and core entity types
//!
//! The world is two independent collections, balls and obstacles, plus the
//! physics configuration fixed at construction. Mutators here are the thin
//! commands the host input layer calls; all motion happens in [`super::step`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::launch_velocity;

/// Arena size in pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Physics configuration, fixed for the life of a playground.
///
/// Degenerate values (bounce factor outside (0, 1], negative radius) are not
/// rejected; they produce physically nonsensical but deterministic motion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Fraction of velocity a reflected component keeps on a bounce, (0, 1]
    pub bounce_factor: f32,
    /// Ball radius (px)
    pub ball_radius: f32,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            bounce_factor: BOUNCE_FACTOR,
            ball_radius: BALL_RADIUS,
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Trail history for rendering (oldest first)
    #[serde(skip)]
    pub trail: Vec<Vec2>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            trail: Vec::with_capacity(TAIL_LENGTH),
        }
    }

    /// Record the current position to the trail, evicting the oldest sample
    /// once the cap is exceeded.
    pub fn record_trail(&mut self, tail_length: usize) {
        self.trail.push(self.pos);
        if self.trail.len() > tail_length {
            self.trail.remove(0);
        }
    }
}

/// An axis-aligned rectangular obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Closest point on the rectangle to an arbitrary point
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left(), self.right()),
            point.y.clamp(self.top(), self.bottom()),
        )
    }
}

/// Stable handle to an obstacle in a playground.
///
/// Obstacles are never removed, so the underlying insertion index stays
/// valid for the life of the playground. Handles are only minted by
/// [`PlaygroundState::add_obstacle`] and [`PlaygroundState::find_obstacle_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObstacleId(usize);

/// The playground world: physics configuration plus the ball and obstacle
/// collections, both in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaygroundState {
    pub config: PlaygroundConfig,
    /// Active balls in spawn order. Balls persist indefinitely.
    pub balls: Vec<Ball>,
    /// Obstacles in insertion order; indices back [`ObstacleId`] handles.
    pub obstacles: Vec<Obstacle>,
}

impl PlaygroundState {
    /// Create an empty playground with the given configuration
    pub fn new(config: PlaygroundConfig) -> Self {
        Self {
            config,
            balls: Vec::new(),
            obstacles: Vec::new(),
        }
    }

    /// Spawn a ball at `origin`, launched at `angle_rad` with `speed`.
    ///
    /// Positive angles launch upward (screen y grows downward). Speed and
    /// angle are assumed pre-clamped by the caller; see
    /// [`crate::gesture::resolve_flick`].
    pub fn spawn_ball(&mut self, origin: Vec2, angle_rad: f32, speed: f32) {
        self.balls
            .push(Ball::new(origin, launch_velocity(angle_rad, speed)));
    }

    /// Add an obstacle and return its handle.
    ///
    /// No uniqueness constraint: duplicate or overlapping obstacles are fine.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> ObstacleId {
        self.obstacles.push(obstacle);
        ObstacleId(self.obstacles.len() - 1)
    }

    /// Find the obstacle under `point`, if any.
    ///
    /// Scans in reverse insertion order so the most recently added
    /// (visually topmost) obstacle wins when obstacles overlap. `None` is a
    /// normal outcome, not an error.
    pub fn find_obstacle_at(&self, point: Vec2) -> Option<ObstacleId> {
        self.obstacles
            .iter()
            .enumerate()
            .rev()
            .find(|(_, ob)| ob.contains(point))
            .map(|(index, _)| ObstacleId(index))
    }

    /// Move an obstacle by `delta`, in place.
    ///
    /// No bounds clamping: obstacles may be dragged partially or fully
    /// outside the arena.
    pub fn move_obstacle(&mut self, id: ObstacleId, delta: Vec2) {
        self.obstacles[id.0].pos += delta;
    }

    /// Obstacle lookup by handle
    pub fn obstacle(&self, id: ObstacleId) -> &Obstacle {
        &self.obstacles[id.0]
    }
}
