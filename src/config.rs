//! Data-driven gameplay tuning
//!
//! The constants in [`crate::consts`] fix the arena geometry and pool
//! capacities; the knobs here are the scalar speeds and policies worth
//! adjusting without a rebuild. Loaded once at startup, never persisted
//! by the core.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{PROJECTILE_SPEED, SHIP_SPEED};

/// What happens when fire is pressed while every projectile slot is
/// active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FirePolicy {
    /// Ring-buffer semantics: the slot under the cursor is rewritten
    #[default]
    OverwriteOldest,
    /// The new shot is discarded and the cursor stays put
    DropNew,
}

/// Runtime gameplay tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ship lateral speed per tick
    pub ship_speed: f32,
    /// Projectile upward speed per tick
    pub projectile_speed: f32,
    /// Projectile overflow policy
    pub fire_policy: FirePolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_speed: SHIP_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            fire_policy: FirePolicy::default(),
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults.
    ///
    /// A missing file is normal (fresh checkout); a malformed one is
    /// logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
