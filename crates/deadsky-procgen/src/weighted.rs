//! Weighted draws against the probability table.
//!
//! One uniform sample in `[0, 1)` is compared against the running sum of
//! the weights in table order. Outcomes are mutually exclusive; if the
//! weights sum below the sample the fallback wins.

use rand::Rng;

use deadsky_core::config::ProbabilityTable;
use deadsky_core::enums::{BonusKind, Formation, MoveArchetype, ShootArchetype};

/// Pick one entry of `table` with a single uniform sample.
pub fn pick_weighted<T: Copy, R: Rng + ?Sized>(rng: &mut R, table: &[(T, f64)], fallback: T) -> T {
    let dice: f64 = rng.gen();
    let mut cumulative = 0.0;
    for &(item, weight) in table {
        cumulative += weight;
        if cumulative > dice {
            return item;
        }
    }
    fallback
}

pub fn pick_move<R: Rng + ?Sized>(rng: &mut R, probs: &ProbabilityTable) -> MoveArchetype {
    pick_weighted(
        rng,
        &[
            (MoveArchetype::Scout, probs.scout),
            (MoveArchetype::Pendulum, probs.pendulum),
            (MoveArchetype::Hunter, probs.hunter),
            (MoveArchetype::Pawn, probs.pawn),
        ],
        MoveArchetype::Pawn,
    )
}

pub fn pick_shoot<R: Rng + ?Sized>(rng: &mut R, probs: &ProbabilityTable) -> ShootArchetype {
    pick_weighted(
        rng,
        &[
            (ShootArchetype::Sniper, probs.sniper),
            (ShootArchetype::Gunner, probs.gunner),
            (ShootArchetype::NoShoot, probs.no_shoot),
        ],
        ShootArchetype::NoShoot,
    )
}

pub fn pick_formation<R: Rng + ?Sized>(rng: &mut R, probs: &ProbabilityTable) -> Formation {
    pick_weighted(
        rng,
        &[
            (Formation::HorizontalLine, probs.h_line),
            (Formation::Backslash, probs.backslash),
            (Formation::Slash, probs.slash),
            (Formation::VerticalLine, probs.v_line),
        ],
        Formation::VerticalLine,
    )
}

/// Bonus dropped by a destroyed enemy, if any. Weapon is tried first.
pub fn pick_bonus<R: Rng + ?Sized>(rng: &mut R, probs: &ProbabilityTable) -> Option<BonusKind> {
    pick_weighted(
        rng,
        &[
            (Some(BonusKind::Weapon), probs.weapon_bonus),
            (Some(BonusKind::Health), probs.health_bonus),
        ],
        None,
    )
}
