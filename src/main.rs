//! Asterfall entry point
//!
//! Runs a scripted headless session: logging init, a seeded state, and
//! the frame driver at the fixed tick rate. A drawing frontend would
//! consume [`FrameDriver::scene`] each frame where this prints
//! once-a-second summaries.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use asterfall::consts::SIM_DT;
use asterfall::sim::GameState;
use asterfall::{FrameDriver, Key, KeyStates, Tuning};

fn main() {
    env_logger::init();
    log::info!("Asterfall starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let tuning = Tuning::load_or_default(Path::new("tuning.json"));
    let mut driver = FrameDriver::new(GameState::new(seed, tuning));
    let mut keys = KeyStates::new();

    log::info!("Game initialized with seed: {seed}");

    // Ten simulated seconds: sweep right then left, tap fire twice a
    // second.
    for frame in 0..600u32 {
        keys.set_held(Key::Right, frame % 120 < 60);
        keys.set_held(Key::Left, frame % 120 >= 60);
        keys.set_held(Key::Fire, frame % 30 == 0);

        driver.advance(SIM_DT, &keys);
        keys.clear_edges();

        if frame % 60 == 59 {
            let scene = driver.scene();
            log::info!(
                "t={}s ship.x={:.0} asteroids={} beams={}",
                (frame + 1) / 60,
                driver.state().ship.pos.x,
                scene.asteroids.len(),
                scene.beams.len(),
            );
        }
    }

    log::info!("Session complete after {} ticks", driver.state().time_ticks);
}
