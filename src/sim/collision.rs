//! Collision detection and response
//!
//! Projectiles are points, asteroids are circles. One resolution pass
//! runs per tick, after all movement.

use glam::Vec2;

use super::state::{GameState, SlotState};

/// Point-in-circle test; a point exactly on the rim counts as a hit.
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// Pair every active projectile against every active asteroid.
///
/// First match wins: a hit deactivates the projectile and ends its scan,
/// and the struck asteroid's slot is respawned on the spot - later
/// projectiles only ever test against live asteroids.
pub fn resolve_collisions(state: &mut GameState) {
    for p in 0..state.projectiles.len() {
        if state.projectiles[p].state != SlotState::Active {
            continue;
        }
        for a in 0..state.asteroids.len() {
            let asteroid = state.asteroids[a];
            if asteroid.state != SlotState::Active {
                continue;
            }
            if point_in_circle(state.projectiles[p].pos, asteroid.pos, asteroid.radius) {
                state.projectiles[p].state = SlotState::Inactive;
                state.asteroids[a].state = SlotState::Inactive;
                state.spawn_asteroid(a);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use crate::consts::SPAWN_BAND_DEPTH;
    use crate::sim::state::{Asteroid, AsteroidKind, Projectile};

    fn state_with_parked_asteroids(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        for asteroid in &mut state.asteroids {
            asteroid.pos = Vec2::new(-500.0, -400.0);
        }
        state
    }

    #[test]
    fn test_point_in_circle_center_and_rim() {
        let center = Vec2::new(400.0, 230.0);
        assert!(point_in_circle(center, center, 15.0));
        assert!(point_in_circle(Vec2::new(415.0, 230.0), center, 15.0));
        // Just past the rim misses.
        assert!(!point_in_circle(Vec2::new(415.01, 230.0), center, 15.0));
    }

    #[test]
    fn test_hit_deactivates_and_respawns_same_pass() {
        let mut state = state_with_parked_asteroids(42);
        state.projectiles[0] = Projectile {
            state: SlotState::Active,
            pos: Vec2::new(400.0, 230.0),
        };
        state.asteroids[0] = Asteroid {
            state: SlotState::Active,
            kind: AsteroidKind::Small,
            radius: 15.0,
            pos: Vec2::new(400.0, 230.0),
            speed: 3.0,
        };

        resolve_collisions(&mut state);

        assert_eq!(state.projectiles[0].state, SlotState::Inactive);
        // The struck slot is already live again, back in the spawn band.
        assert_eq!(state.asteroids[0].state, SlotState::Active);
        assert!(state.asteroids[0].pos.y <= -state.asteroids[0].radius);
        assert!(state.asteroids[0].pos.y >= -SPAWN_BAND_DEPTH);
    }

    #[test]
    fn test_first_match_wins() {
        let mut state = state_with_parked_asteroids(42);
        let overlap = Vec2::new(400.0, 230.0);
        state.projectiles[0] = Projectile {
            state: SlotState::Active,
            pos: overlap,
        };
        for slot in [0, 1] {
            state.asteroids[slot] = Asteroid {
                state: SlotState::Active,
                kind: AsteroidKind::Small,
                radius: 20.0,
                pos: overlap,
                speed: 3.0,
            };
        }

        resolve_collisions(&mut state);

        // The projectile is consumed by slot 0; slot 1 is untouched.
        assert_eq!(state.projectiles[0].state, SlotState::Inactive);
        assert_eq!(state.asteroids[1].pos, overlap);
        assert_eq!(state.asteroids[1].state, SlotState::Active);
    }

    #[test]
    fn test_two_projectiles_two_asteroids_one_pass() {
        let mut state = state_with_parked_asteroids(42);
        let spots = [Vec2::new(200.0, 200.0), Vec2::new(600.0, 400.0)];
        for (slot, spot) in spots.into_iter().enumerate() {
            state.projectiles[slot] = Projectile {
                state: SlotState::Active,
                pos: spot,
            };
            state.asteroids[slot] = Asteroid {
                state: SlotState::Active,
                kind: AsteroidKind::Small,
                radius: 10.0,
                pos: spot,
                speed: 3.0,
            };
        }

        resolve_collisions(&mut state);

        assert_eq!(state.projectiles[0].state, SlotState::Inactive);
        assert_eq!(state.projectiles[1].state, SlotState::Inactive);
        assert!(state.asteroids[0].pos.y < 0.0);
        assert!(state.asteroids[1].pos.y < 0.0);
    }

    #[test]
    fn test_miss_leaves_state_untouched() {
        let mut state = state_with_parked_asteroids(42);
        state.projectiles[0] = Projectile {
            state: SlotState::Active,
            pos: Vec2::new(400.0, 230.0),
        };
        state.asteroids[0] = Asteroid {
            state: SlotState::Active,
            kind: AsteroidKind::Small,
            radius: 15.0,
            pos: Vec2::new(400.0, 260.0),
            speed: 3.0,
        };

        resolve_collisions(&mut state);

        assert_eq!(state.projectiles[0].state, SlotState::Active);
        assert_eq!(state.asteroids[0].pos, Vec2::new(400.0, 260.0));
    }
}
