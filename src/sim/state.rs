//! Entities, pools, and the owned game state
//!
//! Everything that evolves tick to tick: the ship, the two
//! fixed-capacity entity pools, and the seeded RNG that feeds asteroid
//! spawns. Pool slots keep their identity across respawns; the arrays
//! never grow, shrink, or reallocate.

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{FirePolicy, Tuning};
use crate::consts::*;

/// Whether a pool slot participates in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotState {
    #[default]
    Inactive,
    Active,
}

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsteroidKind {
    #[default]
    Small,
    Large,
}

impl AsteroidKind {
    /// Closed radius range for this kind; the two ranges meet at 32 but
    /// draws never cross the class boundary.
    pub fn radius_range(self) -> RangeInclusive<u32> {
        match self {
            AsteroidKind::Small => SMALL_ASTEROID_MIN_RADIUS..=SMALL_ASTEROID_MAX_RADIUS,
            AsteroidKind::Large => LARGE_ASTEROID_MIN_RADIUS..=LARGE_ASTEROID_MAX_RADIUS,
        }
    }

    /// Closed fall-speed range for this kind
    pub fn speed_range(self) -> RangeInclusive<u32> {
        match self {
            AsteroidKind::Small => SMALL_ASTEROID_MIN_SPEED..=SMALL_ASTEROID_MAX_SPEED,
            AsteroidKind::Large => LARGE_ASTEROID_MIN_SPEED..=LARGE_ASTEROID_MAX_SPEED,
        }
    }
}

/// One asteroid pool slot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Asteroid {
    pub state: SlotState,
    pub kind: AsteroidKind,
    pub radius: f32,
    pub pos: Vec2,
    /// Downward fall speed per tick
    pub speed: f32,
}

/// One projectile pool slot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projectile {
    pub state: SlotState,
    pub pos: Vec2,
}

/// The player ship: a position and the triangle derived from it.
///
/// Vertices are ordered apex, base-left, base-right - counter-clockwise
/// winding so filled drawing faces the right way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    pub vertices: [Vec2; 3],
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        let mut ship = Self {
            pos,
            vertices: [Vec2::ZERO; 3],
        };
        ship.recompute_vertices();
        ship
    }

    /// Rebuild the outline around the current position: apex above
    /// center, base corners below.
    pub fn recompute_vertices(&mut self) {
        let h = SHIP_TRIANGLE_SIZE;
        self.vertices = [
            Vec2::new(self.pos.x, self.pos.y - h),
            Vec2::new(self.pos.x - h, self.pos.y + h),
            Vec2::new(self.pos.x + h, self.pos.y + h),
        ];
    }

    /// Apex vertex; projectiles spawn here
    pub fn apex(&self) -> Vec2 {
        self.vertices[0]
    }
}

/// Complete simulation state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Gameplay tuning, fixed at construction
    pub tuning: Tuning,
    pub ship: Ship,
    /// Asteroid pool; every slot is active again by the end of each tick
    pub asteroids: [Asteroid; MAX_ASTEROID_COUNT],
    /// Projectile pool, written at `cursor`
    pub projectiles: [Projectile; MAX_PROJECTILE_COUNT],
    /// Next projectile slot to write; wraps modulo capacity
    pub cursor: usize,
    rng: Pcg32,
}

impl GameState {
    /// Create a state with the ship centered and the asteroid pool fully
    /// spawned. Projectile slots start inactive.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            time_ticks: 0,
            tuning,
            ship: Ship::new(Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0)),
            asteroids: [Asteroid::default(); MAX_ASTEROID_COUNT],
            projectiles: [Projectile::default(); MAX_PROJECTILE_COUNT],
            cursor: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        for slot in 0..MAX_ASTEROID_COUNT {
            state.spawn_asteroid(slot);
        }
        state
    }

    /// Respawn one asteroid slot with fresh random parameters.
    ///
    /// The spawn band sits above the arena top: y in
    /// [-SPAWN_BAND_DEPTH, -radius], so bigger rocks start no closer
    /// than their own radius off-screen.
    pub fn spawn_asteroid(&mut self, slot: usize) {
        let kind = if self.rng.random_range(0..2) == 0 {
            AsteroidKind::Small
        } else {
            AsteroidKind::Large
        };
        let radius = self.rng.random_range(kind.radius_range()) as f32;
        let speed = self.rng.random_range(kind.speed_range()) as f32;
        let x = self.rng.random_range(0.0..=ARENA_WIDTH);
        let y = self.rng.random_range(-SPAWN_BAND_DEPTH..=-radius);
        self.asteroids[slot] = Asteroid {
            state: SlotState::Active,
            kind,
            radius,
            pos: Vec2::new(x, y),
            speed,
        };
    }

    /// Activate a projectile at the ship apex and advance the write
    /// cursor. When the cursor slot is still active the fire policy
    /// decides: overwrite the oldest shot, or drop the new one and leave
    /// the cursor in place.
    pub fn fire_projectile(&mut self) {
        if self.tuning.fire_policy == FirePolicy::DropNew
            && self.projectiles[self.cursor].state == SlotState::Active
        {
            return;
        }
        self.projectiles[self.cursor] = Projectile {
            state: SlotState::Active,
            pos: self.ship.apex(),
        };
        self.cursor = (self.cursor + 1) % MAX_PROJECTILE_COUNT;
    }
}
