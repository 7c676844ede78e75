//! Flick gesture resolution
//!
//! The host input layer tracks a pointer from press to release and hands the
//! raw drag to [`resolve_flick`], which turns it into a clamped launch
//! command for [`crate::sim::PlaygroundState::spawn_ball`]. Raw pointer-event
//! interpretation (tap-vs-drag disambiguation, obstacle grabs) stays in the
//! host.

use glam::Vec2;

use crate::consts::{MAX_LAUNCH_SPEED, MIN_LAUNCH_SPEED};

/// A completed drag gesture as the host observed it
#[derive(Debug, Clone, Copy)]
pub struct Flick {
    /// Press position; the ball spawns here
    pub origin: Vec2,
    /// Release position minus press position
    pub displacement: Vec2,
    /// Press-to-release time in seconds
    pub duration: f32,
}

/// A launch command ready for `spawn_ball`
#[derive(Debug, Clone, Copy)]
pub struct Launch {
    pub origin: Vec2,
    pub angle_rad: f32,
    pub speed: f32,
}

/// Resolve a flick into a launch.
///
/// Velocity is estimated as displacement over duration, the speed is clamped
/// to the launch range, and the angle is measured with screen-up positive so
/// it feeds straight into `spawn_ball`.
pub fn resolve_flick(flick: &Flick) -> Launch {
    // Instant taps still get a finite velocity
    let duration = flick.duration.max(0.001);
    let velocity = flick.displacement / duration;

    let speed = velocity.length().clamp(MIN_LAUNCH_SPEED, MAX_LAUNCH_SPEED);
    let angle_rad = (-velocity.y).atan2(velocity.x);

    Launch {
        origin: flick.origin,
        angle_rad,
        speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch_velocity;

    #[test]
    fn test_slow_drag_clamps_to_min_speed() {
        let launch = resolve_flick(&Flick {
            origin: Vec2::ZERO,
            displacement: Vec2::new(5.0, 0.0),
            duration: 1.0,
        });
        assert!((launch.speed - MIN_LAUNCH_SPEED).abs() < 0.001);
    }

    #[test]
    fn test_fast_drag_clamps_to_max_speed() {
        let launch = resolve_flick(&Flick {
            origin: Vec2::ZERO,
            displacement: Vec2::new(500.0, -500.0),
            duration: 0.01,
        });
        assert!((launch.speed - MAX_LAUNCH_SPEED).abs() < 0.001);
    }

    #[test]
    fn test_zero_duration_uses_floor() {
        let launch = resolve_flick(&Flick {
            origin: Vec2::ZERO,
            displacement: Vec2::new(1.0, 0.0),
            duration: 0.0,
        });
        // 1 px over the 1 ms floor is 1000 px/s, inside the clamp range
        assert!((launch.speed - 1000.0).abs() < 0.001);
    }

    #[test]
    fn test_resolved_launch_reconstructs_drag_direction() {
        // Drag up and to the right (screen y decreasing)
        let launch = resolve_flick(&Flick {
            origin: Vec2::new(200.0, 300.0),
            displacement: Vec2::new(120.0, -90.0),
            duration: 0.2,
        });

        let vel = launch_velocity(launch.angle_rad, launch.speed);
        // Speed is clamped but the direction survives: 4:-3 ratio
        assert!(vel.x > 0.0);
        assert!(vel.y < 0.0);
        assert!((vel.y / vel.x - (-0.75)).abs() < 0.001);
    }
}
