//! Nebula Strike headless driver
//!
//! Plays a scripted demo session on a simulated 60 Hz clock and prints the
//! final snapshot as JSON. Usage: `nebula-strike [tuning.json]`.
//! `NEBULA_SEED` overrides the run seed.

use nebula_strike::consts::SIM_DT;
use nebula_strike::sim::Direction;
use nebula_strike::{Session, Tuning};

/// Length of the demo in presented frames
const DEMO_FRAMES: u32 = 3600;
const DEFAULT_SEED: u64 = 0x5EED;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Nebula Strike (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path),
        None => {
            log::info!("No tuning file given, using defaults");
            Tuning::default()
        }
    };

    let seed = std::env::var("NEBULA_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED);

    let mut session = Session::new(seed, tuning);
    run_demo(&mut session);

    let snapshot = session.snapshot();
    log::info!(
        "Demo finished after {} ticks: score {}, lives {}",
        snapshot.tick,
        snapshot.score,
        snapshot.lives
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Could not serialize snapshot: {}", err),
    }
}

/// Scripted input: a wave of adversaries, then patrol left and right while
/// firing. Stands in for a keyboard.
fn run_demo(session: &mut Session) {
    for _ in 0..8 {
        session.on_spawn_adversary_triggered();
    }

    let mut heading = Direction::Right;
    for frame in 0..DEMO_FRAMES {
        if frame % 240 == 0 {
            session.on_direction_released(heading);
            heading = if heading == Direction::Right {
                Direction::Left
            } else {
                Direction::Right
            };
            session.on_direction_pressed(heading);
        }
        if frame % 240 == 60 {
            session.on_direction_released(heading);
        }
        if frame % 12 == 0 {
            session.on_fire_triggered();
        }
        if frame % 300 == 150 {
            session.on_spawn_adversary_triggered();
        }

        session.advance(SIM_DT);

        for event in session.events() {
            log::debug!("{:?}", event);
        }
    }
}
