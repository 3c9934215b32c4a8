//! Guard pursuit steering and capture detection
//!
//! One stateless update per guard slot per tick. Guards steer on the ground
//! plane only; capture uses planar distance so a lifted player directly
//! above a guard is still caught.

use glam::Vec3;

use super::state::GuardState;
use crate::consts::{CAPTURE_RADIUS, CHASE_SPEED};
use crate::flatten;

/// Result of one pursuit step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuitOutcome {
    /// Guard advanced toward the player
    Advanced,
    /// Player is within the capture radius; the guard did not move
    Captured,
}

/// Advance one guard toward the player's finalized position for this tick.
pub fn update_guard(guard: &mut GuardState, player_pos: Vec3) -> PursuitOutcome {
    let to_player = flatten(player_pos - guard.pos);
    let distance = to_player.length();

    // Coincident positions have no direction to normalize; that is a capture
    if distance <= CAPTURE_RADIUS {
        return PursuitOutcome::Captured;
    }

    guard.pos += to_player / distance * CHASE_SPEED;
    PursuitOutcome::Advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_guard_advances_along_plus_z() {
        // Guard at origin, player 2 units down +z: outside the radius
        let mut guard = GuardState {
            id: 0,
            pos: Vec3::ZERO,
        };
        let player = Vec3::new(0.0, 0.0, 2.0);

        assert_eq!(update_guard(&mut guard, player), PursuitOutcome::Advanced);
        assert!((guard.pos.z - CHASE_SPEED).abs() < 1e-6);
        assert_eq!(guard.pos.x, 0.0);
        assert_eq!(guard.pos.y, 0.0);
    }

    #[test]
    fn test_capture_fires_at_radius_and_freezes_guard() {
        let mut guard = GuardState {
            id: 0,
            pos: Vec3::ZERO,
        };
        let player = Vec3::new(0.0, 0.0, CAPTURE_RADIUS);

        let before = guard.pos;
        assert_eq!(update_guard(&mut guard, player), PursuitOutcome::Captured);
        assert_eq!(guard.pos, before);
    }

    #[test]
    fn test_coincident_positions_capture() {
        let mut guard = GuardState {
            id: 0,
            pos: Vec3::new(3.0, 1.0, -4.0),
        };
        let player = guard.pos;
        assert_eq!(update_guard(&mut guard, player), PursuitOutcome::Captured);
    }

    #[test]
    fn test_capture_ignores_height() {
        let mut guard = GuardState {
            id: 0,
            pos: Vec3::new(0.0, 1.0, 0.0),
        };
        // Player lifted high above the guard
        let player = Vec3::new(0.5, 2.5, 0.5);
        assert_eq!(update_guard(&mut guard, player), PursuitOutcome::Captured);
    }

    #[test]
    fn test_pursuit_closes_and_captures_once_in_range() {
        let mut guard = GuardState {
            id: 0,
            pos: Vec3::ZERO,
        };
        let player = Vec3::new(0.0, 0.0, 2.0);

        let mut steps = 0;
        while update_guard(&mut guard, player) == PursuitOutcome::Advanced {
            steps += 1;
            assert!(steps < 100, "guard never captured");
        }
        // 0.5 units to close at 0.06 per tick
        assert_eq!(steps, 9);
        assert!(crate::planar_distance(guard.pos, player) <= CAPTURE_RADIUS);
    }

    proptest! {
        #[test]
        fn capture_iff_planar_distance_within_radius(
            gx in -50.0f32..50.0, gz in -50.0f32..50.0,
            px in -50.0f32..50.0, pz in -50.0f32..50.0,
            gy in 0.0f32..3.0, py in 0.0f32..3.0,
        ) {
            let mut guard = GuardState { id: 0, pos: Vec3::new(gx, gy, gz) };
            let player = Vec3::new(px, py, pz);
            let planar = crate::planar_distance(guard.pos, player);

            let before = guard.pos;
            let outcome = update_guard(&mut guard, player);
            if planar <= CAPTURE_RADIUS {
                prop_assert_eq!(outcome, PursuitOutcome::Captured);
                prop_assert_eq!(guard.pos, before);
            } else {
                prop_assert_eq!(outcome, PursuitOutcome::Advanced);
                prop_assert!((guard.pos - before).length() <= CHASE_SPEED + 1e-5);
            }
        }
    }
}
