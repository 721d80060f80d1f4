//! Fixed-timestep frame driver
//!
//! Owns the real-time accumulator and the input seam. Wall-clock frame
//! deltas are consumed in fixed `SIM_DT` steps, with a substep cap so a
//! long stall cannot spiral. Press edges reach only the first substep of
//! a frame.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::scene::Scene;
use crate::sim::{GameState, TickInput, tick};

/// The key set the core consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
}

const KEY_COUNT: usize = 3;

/// Input collaborator seam: level and edge queries over the key set
pub trait InputSource {
    /// Is the key currently held?
    fn is_held(&self, key: Key) -> bool;
    /// Did the key transition to pressed since the last frame?
    fn was_pressed(&self, key: Key) -> bool;
}

/// Level-to-edge adapter for backends that only report current key
/// state.
///
/// Feed [`KeyStates::set_held`] from the platform's key events or polled
/// state, and call [`KeyStates::clear_edges`] after each driver advance.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyStates {
    held: [bool; KEY_COUNT],
    pressed: [bool; KEY_COUNT],
}

impl KeyStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the key's current level; a rising edge marks it pressed
    /// until the edges are cleared.
    pub fn set_held(&mut self, key: Key, down: bool) {
        let slot = key as usize;
        if down && !self.held[slot] {
            self.pressed[slot] = true;
        }
        self.held[slot] = down;
    }

    /// Drop press edges once the frame has consumed them.
    pub fn clear_edges(&mut self) {
        self.pressed = [false; KEY_COUNT];
    }
}

impl InputSource for KeyStates {
    fn is_held(&self, key: Key) -> bool {
        self.held[key as usize]
    }

    fn was_pressed(&self, key: Key) -> bool {
        self.pressed[key as usize]
    }
}

/// Sample one tick's worth of input from the collaborator.
fn sample(source: &impl InputSource) -> TickInput {
    TickInput {
        left: source.is_held(Key::Left),
        right: source.is_held(Key::Right),
        fire: source.was_pressed(Key::Fire),
    }
}

/// Drives the simulation at a fixed tick rate from variable frame
/// deltas.
#[derive(Debug)]
pub struct FrameDriver {
    state: GameState,
    accumulator: f32,
}

impl FrameDriver {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            accumulator: 0.0,
        }
    }

    /// Consume a wall-clock frame delta, running as many fixed ticks as
    /// fit. Returns the number of ticks run this frame.
    pub fn advance(&mut self, dt: f32, source: &impl InputSource) -> u32 {
        // Long stalls collapse to 100ms of simulated time.
        self.accumulator += dt.min(0.1);

        let mut input = sample(source);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &input);
            self.accumulator -= SIM_DT;
            substeps += 1;
            // One press edge fires one shot, not one per substep.
            input.fire = false;
        }
        substeps
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for frontends (restart, debug tooling).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Render handoff for the current frame.
    pub fn scene(&self) -> Scene {
        Scene::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use crate::sim::SlotState;

    fn driver() -> FrameDriver {
        let mut driver = FrameDriver::new(GameState::new(42, Tuning::default()));
        // Park the asteroid field far from the firing line so shot
        // counts are not disturbed by chance hits.
        for asteroid in &mut driver.state_mut().asteroids {
            asteroid.pos = glam::Vec2::new(-500.0, -400.0);
            asteroid.speed = 1.0;
        }
        driver
    }

    fn active_shots(driver: &FrameDriver) -> usize {
        driver
            .state()
            .projectiles
            .iter()
            .filter(|p| p.state == SlotState::Active)
            .count()
    }

    #[test]
    fn test_accumulator_converts_time_to_ticks() {
        let mut driver = driver();
        let keys = KeyStates::new();

        // 21ms frames land between tick boundaries; the remainder must
        // carry over. 0.21s of wall clock is 12 whole ticks at 60 Hz.
        let mut ran = 0;
        for _ in 0..10 {
            ran += driver.advance(0.021, &keys);
        }
        assert_eq!(ran, 12);
        assert_eq!(driver.state().time_ticks, 12);
    }

    #[test]
    fn test_stall_collapses_to_clamped_frame() {
        let mut stalled = driver();
        let mut steady = driver();
        let keys = KeyStates::new();

        // A multi-second hitch catches up exactly as far as a 100ms
        // frame would, and stays under the substep cap.
        let ran_stall = stalled.advance(10.0, &keys);
        let ran_frame = steady.advance(0.1, &keys);
        assert_eq!(ran_stall, ran_frame);
        assert!(ran_stall <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_press_edge_fires_once_per_frame() {
        let mut driver = driver();
        let mut keys = KeyStates::new();

        // Two substeps run this frame, but only the first sees the edge.
        keys.set_held(Key::Fire, true);
        let ran = driver.advance(0.04, &keys);
        keys.clear_edges();
        assert_eq!(ran, 2);
        assert_eq!(active_shots(&driver), 1);

        // Still held on the next frame: no new edge, no new shot.
        keys.set_held(Key::Fire, true);
        driver.advance(0.04, &keys);
        keys.clear_edges();
        assert_eq!(active_shots(&driver), 1);

        // Release and press again: a fresh edge, a fresh shot.
        keys.set_held(Key::Fire, false);
        keys.set_held(Key::Fire, true);
        driver.advance(0.04, &keys);
        keys.clear_edges();
        assert_eq!(active_shots(&driver), 2);
    }

    #[test]
    fn test_held_movement_applies_every_tick() {
        let mut driver = driver();
        let mut keys = KeyStates::new();
        keys.set_held(Key::Right, true);

        // Three 18ms frames run one tick each at 10 px/tick.
        for _ in 0..3 {
            driver.advance(0.018, &keys);
        }
        assert_eq!(driver.state().ship.pos.x, 430.0);
    }
}
