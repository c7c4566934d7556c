//! Archetype-specific temper parameters.

use deadsky_core::constants::*;
use deadsky_core::enums::{MoveArchetype, ShootArchetype};

/// Fire pattern parameters for a shoot archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootProfile {
    /// Cooldown after a burst (seconds).
    pub group_delay: f64,
    /// Shots per burst.
    pub group_size: i32,
}

/// Get the fire pattern for a given archetype.
pub fn shoot_profile(archetype: ShootArchetype) -> ShootProfile {
    match archetype {
        ShootArchetype::Sniper => ShootProfile {
            group_delay: SNIPER_GROUP_DELAY,
            group_size: SNIPER_GROUP_SIZE,
        },
        ShootArchetype::Gunner => ShootProfile {
            group_delay: GUNNER_GROUP_DELAY,
            group_size: GUNNER_GROUP_SIZE,
        },
        ShootArchetype::NoShoot => ShootProfile {
            group_delay: 0.0,
            group_size: 0,
        },
    }
}

/// Vertical speed multiplier applied to the base enemy speed.
pub fn move_speed_factor(archetype: MoveArchetype) -> f64 {
    match archetype {
        MoveArchetype::Scout => SCOUT_SPEED_FACTOR,
        MoveArchetype::Pawn | MoveArchetype::Pendulum | MoveArchetype::Hunter => 1.0,
    }
}
