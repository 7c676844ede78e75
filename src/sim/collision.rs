//! Collision detection for balls against rectangular obstacles
//!
//! Balls are circles; obstacles are axis-aligned rectangles. Overlap is
//! detected with a closest-point test, and a hit resolves against the single
//! rectangle edge nearest to the ball center.

use glam::Vec2;

use super::state::Obstacle;

/// The rectangle edge a collision resolves against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Check whether a ball overlaps an obstacle.
///
/// Compares the squared distance from the ball center to the closest point
/// on the rectangle against the squared radius. A ball center inside the
/// rectangle is its own closest point, so it always counts as overlapping.
pub fn ball_obstacle_overlap(ball_pos: Vec2, ball_radius: f32, ob: &Obstacle) -> bool {
    let closest = ob.closest_point(ball_pos);
    ball_pos.distance_squared(closest) < ball_radius * ball_radius
}

/// Pick the rectangle edge nearest to the ball center.
///
/// Distances are measured from the center to each edge's infinite line, not
/// penetration depth along the circle, so a ball overlapping a corner region
/// can resolve against an axis that is not the true minimum-penetration
/// direction. Callers depend on that behavior; keep it. Ties go to the
/// first edge in Left, Right, Top, Bottom order.
pub fn nearest_edge(ball_pos: Vec2, ob: &Obstacle) -> Edge {
    let dist_left = (ball_pos.x - ob.left()).abs();
    let dist_right = (ball_pos.x - ob.right()).abs();
    let dist_top = (ball_pos.y - ob.top()).abs();
    let dist_bottom = (ball_pos.y - ob.bottom()).abs();

    let min_dist = dist_left.min(dist_right).min(dist_top).min(dist_bottom);

    if min_dist == dist_left {
        Edge::Left
    } else if min_dist == dist_right {
        Edge::Right
    } else if min_dist == dist_top {
        Edge::Top
    } else {
        Edge::Bottom
    }
}
