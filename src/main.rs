//! Flick Arena headless demo
//!
//! Builds the arena, flicks a few seeded-random balls into it, and drives
//! the simulation with a fixed-timestep loop, logging positions once per
//! simulated second and dumping the final world as JSON on stdout.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use flick_arena::consts::{SIM_DT, TAIL_LENGTH};
use flick_arena::gesture::{Flick, resolve_flick};
use flick_arena::sim::{Bounds, Obstacle, PlaygroundConfig, PlaygroundState, step};

const DEMO_SECONDS: u32 = 10;
const TICKS_PER_SECOND: u32 = 120;

fn main() {
    env_logger::init();

    let seed = 0xF11C;
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!("Flick Arena demo starting (seed {seed:#x})");

    let bounds = Bounds::new(400.0, 400.0);
    let mut state = PlaygroundState::new(PlaygroundConfig::default());

    // Column of square obstacles along the left wall
    for row in 0..3 {
        state.add_obstacle(Obstacle::new(
            Vec2::new(40.0, 40.0 + row as f32 * 155.0),
            Vec2::new(150.0, 150.0),
        ));
    }

    // Barrage of random flicks, launched up-left from the bottom-right corner
    for _ in 0..5 {
        let flick = Flick {
            origin: Vec2::new(340.0, 360.0),
            displacement: Vec2::new(
                rng.random_range(-240.0..-60.0),
                rng.random_range(-240.0..-60.0),
            ),
            duration: rng.random_range(0.05..0.25),
        };
        let launch = resolve_flick(&flick);
        state.spawn_ball(launch.origin, launch.angle_rad, launch.speed);
        log::debug!(
            "launched at {:.2} rad, {:.0} px/s",
            launch.angle_rad,
            launch.speed
        );
    }

    for tick_no in 1..=DEMO_SECONDS * TICKS_PER_SECOND {
        step(&mut state, SIM_DT, bounds, TAIL_LENGTH);

        if tick_no % TICKS_PER_SECOND == 0 {
            let secs = tick_no / TICKS_PER_SECOND;
            for (i, ball) in state.balls.iter().enumerate() {
                log::info!(
                    "t={secs}s ball {i} pos=({:.1}, {:.1}) vel=({:.1}, {:.1})",
                    ball.pos.x,
                    ball.pos.y,
                    ball.vel.x,
                    ball.vel.y
                );
            }
        }
    }

    match serde_json::to_string(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize final state: {e}"),
    }
}
