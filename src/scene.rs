//! Per-frame render handoff
//!
//! The drawing collaborator owns clearing, colors, and presentation; the
//! core hands it final shapes once per frame and nothing else.

use glam::Vec2;

use crate::consts::PROJECTILE_BEAM_LENGTH;
use crate::sim::{GameState, SlotState};

/// A filled circle (asteroid)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// A beam segment (projectile), drawn from `from` up to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub from: Vec2,
    pub to: Vec2,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Scene {
    /// Ship outline, counter-clockwise: apex, base-left, base-right
    pub ship: [Vec2; 3],
    /// Active asteroids
    pub asteroids: Vec<Circle>,
    /// Active projectile beams
    pub beams: Vec<Beam>,
}

impl Scene {
    /// Capture the drawable shapes of the current state.
    pub fn capture(state: &GameState) -> Self {
        let asteroids = state
            .asteroids
            .iter()
            .filter(|a| a.state == SlotState::Active)
            .map(|a| Circle {
                center: a.pos,
                radius: a.radius,
            })
            .collect();

        let beams = state
            .projectiles
            .iter()
            .filter(|p| p.state == SlotState::Active)
            .map(|p| Beam {
                from: p.pos,
                to: p.pos - Vec2::new(0.0, PROJECTILE_BEAM_LENGTH),
            })
            .collect();

        Self {
            ship: state.ship.vertices,
            asteroids,
            beams,
        }
    }
}
