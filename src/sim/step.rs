//! Per-frame playground update
//!
//! Advances every ball independently: trail recording, gravity integration,
//! wall bounces, then obstacle resolution. Balls do not interact with each
//! other, and obstacles are scanned linearly; one step is O(balls × obstacles).

use super::collision::{Edge, ball_obstacle_overlap, nearest_edge};
use super::state::{Bounds, PlaygroundState};
use crate::consts::GROUND_DRAG;

/// Advance the playground by one timestep.
///
/// `dt` is the elapsed time in seconds since the previous frame, `bounds` is
/// the arena size, and `tail_length` caps each ball's trail history. The host
/// calls this once per rendered frame; between two calls the entity
/// collections are stable for reading.
pub fn step(state: &mut PlaygroundState, dt: f32, bounds: Bounds, tail_length: usize) {
    let config = state.config;
    let radius = config.ball_radius;
    let obstacles = &state.obstacles;

    for ball in state.balls.iter_mut() {
        // Trail first, so it lags the integrated position by one step
        ball.record_trail(tail_length);

        // Semi-implicit Euler: gravity into velocity, then velocity into position
        ball.vel.y += config.gravity * dt;
        ball.pos += ball.vel * dt;

        // Wall bounces, each axis on its own; a corner hit can reflect both
        // axes in the same frame
        if ball.pos.x - radius < 0.0 {
            ball.pos.x = radius;
            ball.vel.x = -ball.vel.x * config.bounce_factor;
        } else if ball.pos.x + radius > bounds.width {
            ball.pos.x = bounds.width - radius;
            ball.vel.x = -ball.vel.x * config.bounce_factor;
        }
        if ball.pos.y - radius < 0.0 {
            ball.pos.y = radius;
            ball.vel.y = -ball.vel.y * config.bounce_factor;
        } else if ball.pos.y + radius > bounds.height {
            ball.pos.y = bounds.height - radius;
            ball.vel.y = -ball.vel.y * config.bounce_factor;
            // Floor contact scrubs a little horizontal speed
            ball.vel.x *= GROUND_DRAG;
        }

        // Obstacles, in insertion order; each hit resolves against the single
        // nearest edge
        for ob in obstacles {
            if !ball_obstacle_overlap(ball.pos, radius, ob) {
                continue;
            }

            match nearest_edge(ball.pos, ob) {
                Edge::Left => {
                    ball.pos.x = ob.left() - radius;
                    ball.vel.x = -ball.vel.x * config.bounce_factor;
                }
                Edge::Right => {
                    ball.pos.x = ob.right() + radius;
                    ball.vel.x = -ball.vel.x * config.bounce_factor;
                }
                Edge::Top => {
                    ball.pos.y = ob.top() - radius;
                    ball.vel.y = -ball.vel.y * config.bounce_factor;
                }
                Edge::Bottom => {
                    ball.pos.y = ob.bottom() + radius;
                    ball.vel.y = -ball.vel.y * config.bounce_factor;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, Obstacle, PlaygroundConfig};
    use glam::Vec2;

    fn default_state() -> PlaygroundState {
        PlaygroundState::new(PlaygroundConfig::default())
    }

    #[test]
    fn test_dropped_ball_bounces_off_floor() {
        // Drop from (100, 100) with no initial velocity; gravity 500,
        // bounce 0.7, radius 10, 400x400 arena, dt 0.1
        let mut state = default_state();
        state.spawn_ball(Vec2::new(100.0, 100.0), 0.0, 0.0);
        let bounds = Bounds::new(400.0, 400.0);

        let mut steps = 0;
        while state.balls[0].vel.y >= 0.0 {
            step(&mut state, 0.1, bounds, 50);
            steps += 1;
            assert!(steps < 100, "ball never reached the floor");
        }

        let ball = &state.balls[0];
        // Velocity reaches 550 on the impact step, then reflects at 0.7
        assert!((ball.vel.y - (-385.0)).abs() < 0.01);
        // Clamped to rest exactly one radius above the floor
        assert!((ball.pos.y - 390.0).abs() < 0.01);
        // The extra floor drag applies to x only; x velocity stays zero
        assert!(ball.vel.x.abs() < 0.001);
    }

    #[test]
    fn test_left_wall_bounce_scales_by_bounce_factor() {
        let mut state = default_state();
        state.balls.push(Ball::new(Vec2::new(15.0, 200.0), Vec2::new(-100.0, 0.0)));

        step(&mut state, 0.1, Bounds::new(400.0, 400.0), 50);

        let ball = &state.balls[0];
        assert!((ball.pos.x - 10.0).abs() < 0.001);
        assert!((ball.vel.x - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_floor_bounce_adds_horizontal_drag() {
        let mut state = default_state();
        state.balls.push(Ball::new(Vec2::new(200.0, 380.0), Vec2::new(100.0, 100.0)));

        step(&mut state, 0.1, Bounds::new(400.0, 400.0), 50);

        let ball = &state.balls[0];
        // y reflects at the bounce factor, x only takes the 0.98 drag
        assert!((ball.vel.y - (-105.0)).abs() < 0.01);
        assert!((ball.vel.x - 98.0).abs() < 0.01);
        assert!((ball.pos.y - 390.0).abs() < 0.001);
    }

    #[test]
    fn test_corner_reflects_both_axes_in_one_frame() {
        let mut state = default_state();
        state.balls.push(Ball::new(Vec2::new(12.0, 385.0), Vec2::new(-200.0, 100.0)));

        step(&mut state, 0.1, Bounds::new(400.0, 400.0), 50);

        let ball = &state.balls[0];
        assert!((ball.pos.x - 10.0).abs() < 0.001);
        assert!((ball.pos.y - 390.0).abs() < 0.001);
        // x reflected off the left wall, then damped by the floor contact
        assert!((ball.vel.x - 140.0 * 0.98).abs() < 0.01);
        assert!((ball.vel.y - (-105.0)).abs() < 0.01);
    }

    #[test]
    fn test_obstacle_hit_resolves_one_radius_off_nearest_edge() {
        let mut state = PlaygroundState::new(PlaygroundConfig {
            gravity: 0.0,
            bounce_factor: 0.7,
            ball_radius: 10.0,
        });
        state.add_obstacle(Obstacle::new(Vec2::new(100.0, 100.0), Vec2::new(100.0, 50.0)));
        state.balls.push(Ball::new(Vec2::new(150.0, 95.0), Vec2::new(0.0, 50.0)));

        step(&mut state, 0.001, Bounds::new(400.0, 400.0), 50);

        let ball = &state.balls[0];
        // Resolved against the top edge: exactly one radius above it
        assert!((ball.pos.y - 90.0).abs() < 0.001);
        assert!((ball.vel.y - (-35.0)).abs() < 0.001);
        assert!(ball.vel.x.abs() < 0.001);
        assert!((ball.pos.x - 150.0).abs() < 0.1);
    }

    #[test]
    fn test_obstacle_side_hit_reflects_x_only() {
        let mut state = PlaygroundState::new(PlaygroundConfig {
            gravity: 0.0,
            bounce_factor: 0.7,
            ball_radius: 10.0,
        });
        state.add_obstacle(Obstacle::new(Vec2::new(100.0, 100.0), Vec2::new(100.0, 50.0)));
        state.balls.push(Ball::new(Vec2::new(95.0, 125.0), Vec2::new(60.0, 0.0)));

        step(&mut state, 0.001, Bounds::new(400.0, 400.0), 50);

        let ball = &state.balls[0];
        assert!((ball.pos.x - 90.0).abs() < 0.001);
        assert!((ball.vel.x - (-42.0)).abs() < 0.01);
        assert!(ball.vel.y.abs() < 0.001);
    }

    #[test]
    fn test_trail_lags_position_by_one_step() {
        let mut state = default_state();
        state.spawn_ball(Vec2::new(100.0, 100.0), 0.0, 300.0);

        step(&mut state, 0.1, Bounds::new(4000.0, 4000.0), 50);

        let ball = &state.balls[0];
        // The trail holds the pre-integration position
        assert_eq!(ball.trail.len(), 1);
        assert_eq!(ball.trail[0], Vec2::new(100.0, 100.0));
        assert!((ball.pos.x - 130.0).abs() < 0.001);
    }

    #[test]
    fn test_step_without_balls_is_a_no_op() {
        let mut state = default_state();
        state.add_obstacle(Obstacle::new(Vec2::new(40.0, 40.0), Vec2::new(150.0, 150.0)));

        step(&mut state, 0.1, Bounds::new(400.0, 400.0), 50);

        assert!(state.balls.is_empty());
        assert_eq!(state.obstacles.len(), 1);
    }
}
