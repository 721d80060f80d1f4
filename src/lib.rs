//! Asterfall - a fixed-arena falling-asteroid arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, ticking, collisions)
//! - `driver`: Fixed-timestep frame driver and the input seam
//! - `scene`: Per-frame render handoff for the drawing collaborator
//! - `config`: Data-driven gameplay tuning

pub mod config;
pub mod driver;
pub mod scene;
pub mod sim;

pub use config::{FirePolicy, Tuning};
pub use driver::{FrameDriver, InputSource, Key, KeyStates};
pub use scene::{Beam, Circle, Scene};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (screen coordinates, +y down, origin top-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ship lateral speed per tick
    pub const SHIP_SPEED: f32 = 10.0;
    /// Half-extent of the ship triangle (apex and base corner offsets)
    pub const SHIP_TRIANGLE_SIZE: f32 = 10.0;

    /// Asteroid pool capacity
    pub const MAX_ASTEROID_COUNT: usize = 32;
    /// Depth of the off-screen spawn band above the arena top
    pub const SPAWN_BAND_DEPTH: f32 = ARENA_HEIGHT / 2.0;

    /// Small asteroid parameter bounds (closed integer ranges)
    pub const SMALL_ASTEROID_MIN_RADIUS: u32 = 8;
    pub const SMALL_ASTEROID_MAX_RADIUS: u32 = 32;
    pub const SMALL_ASTEROID_MIN_SPEED: u32 = 2;
    pub const SMALL_ASTEROID_MAX_SPEED: u32 = 10;

    /// Large asteroid parameter bounds (bigger and slower)
    pub const LARGE_ASTEROID_MIN_RADIUS: u32 = 32;
    pub const LARGE_ASTEROID_MAX_RADIUS: u32 = 48;
    pub const LARGE_ASTEROID_MIN_SPEED: u32 = 1;
    pub const LARGE_ASTEROID_MAX_SPEED: u32 = 4;

    /// Projectile pool capacity
    pub const MAX_PROJECTILE_COUNT: usize = 8;
    /// Projectile upward speed per tick
    pub const PROJECTILE_SPEED: f32 = 20.0;
    /// Beam length for the render handoff (extends upward from position)
    pub const PROJECTILE_BEAM_LENGTH: f32 = 10.0;
}
