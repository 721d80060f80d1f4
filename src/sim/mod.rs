//! Deterministic simulation core
//!
//! Gameplay state and rules, nothing else: fixed timestep, one seeded
//! RNG stream, slot-index iteration order, and no rendering or platform
//! dependencies. Given the same seed and inputs, two runs agree
//! bit-for-bit.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{point_in_circle, resolve_collisions};
pub use state::{Asteroid, AsteroidKind, GameState, Projectile, Ship, SlotState};
pub use tick::{TickInput, tick};
