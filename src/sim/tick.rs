//! Per-tick simulation update
//!
//! One call advances the world by exactly one tick. The ordering is
//! fixed - ship, asteroids, projectiles, then collisions - so a pair
//! that only overlaps after this tick's movement is caught this tick.
//! All speeds are per-tick deltas; there is no dt.

use super::collision::resolve_collisions;
use super::state::{GameState, SlotState};
use crate::consts::ARENA_HEIGHT;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move left (level: key currently held)
    pub left: bool,
    /// Move right (level: key currently held)
    pub right: bool,
    /// Fire (edge: key pressed this tick, not held-repeat)
    pub fire: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;
    update_ship(state, input);
    update_asteroids(state);
    update_projectiles(state);
    resolve_collisions(state);
}

/// Lateral movement and fire. Opposite keys cancel out, and the ship is
/// not clamped to the arena.
fn update_ship(state: &mut GameState, input: &TickInput) {
    let mut moved = false;
    if input.left {
        state.ship.pos.x -= state.tuning.ship_speed;
        moved = true;
    }
    if input.right {
        state.ship.pos.x += state.tuning.ship_speed;
        moved = true;
    }
    if moved {
        state.ship.recompute_vertices();
    }

    if input.fire {
        state.fire_projectile();
    }
}

/// Advance falling asteroids, evict the fully off-screen ones, and
/// respawn every inactive slot in the same pass.
fn update_asteroids(state: &mut GameState) {
    for slot in 0..state.asteroids.len() {
        let asteroid = &mut state.asteroids[slot];
        if asteroid.state == SlotState::Active {
            asteroid.pos.y += asteroid.speed;
            if asteroid.pos.y > ARENA_HEIGHT + asteroid.radius {
                asteroid.state = SlotState::Inactive;
            }
        }
        // Same-tick replacement keeps the population at capacity.
        if state.asteroids[slot].state == SlotState::Inactive {
            state.spawn_asteroid(slot);
        }
    }
}

/// Advance projectiles and deactivate the ones whose beam has fully left
/// the arena top.
fn update_projectiles(state: &mut GameState) {
    let speed = state.tuning.projectile_speed;
    for projectile in &mut state.projectiles {
        if projectile.state == SlotState::Active {
            projectile.pos.y -= speed;
            if projectile.pos.y < 0.0 {
                projectile.state = SlotState::Inactive;
            }
        }
    }
}
