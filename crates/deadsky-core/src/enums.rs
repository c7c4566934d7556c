//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Discriminant of every game object. Collision rules match on this instead
/// of on concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    PlayerShip,
    EnemyShip,
    PlayerBullet,
    EnemyBullet,
    HealthBonus,
    WeaponBonus,
    Explode,
}

impl ObjectKind {
    pub fn is_ship(self) -> bool {
        matches!(self, ObjectKind::PlayerShip | ObjectKind::EnemyShip)
    }
}

/// Which side fired a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

impl Faction {
    /// Kind of bullet this faction fires.
    pub fn bullet_kind(self) -> ObjectKind {
        match self {
            Faction::Player => ObjectKind::PlayerBullet,
            Faction::Enemy => ObjectKind::EnemyBullet,
        }
    }

    /// Kind of ship that consumes a bullet of this faction on contact.
    pub fn foe_ship(self) -> ObjectKind {
        match self {
            Faction::Player => ObjectKind::EnemyShip,
            Faction::Enemy => ObjectKind::PlayerShip,
        }
    }
}

/// Bonus dropped by a destroyed enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    /// Restores hit points.
    Health,
    /// Raises the player's weapon level.
    Weapon,
}

impl BonusKind {
    pub fn object_kind(self) -> ObjectKind {
        match self {
            BonusKind::Health => ObjectKind::HealthBonus,
            BonusKind::Weapon => ObjectKind::WeaponBonus,
        }
    }
}

/// Opaque sprite handle resolved by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
    HealthBonus,
    WeaponBonus,
    Explode,
}

/// Movement behavior archetype of an enemy group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveArchetype {
    /// Drifts down at the base enemy speed.
    Pawn,
    /// Drifts down at twice the base speed.
    Scout,
    /// Swings left and right inside a horizontal range.
    Pendulum,
    /// Steers horizontally toward the player.
    Hunter,
}

/// Fire pattern archetype of an enemy group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShootArchetype {
    Sniper,
    Gunner,
    NoShoot,
}

/// Line shape an enemy group spawns in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    /// Side by side.
    HorizontalLine,
    /// One behind another.
    VerticalLine,
    /// Rising to the right: `/`.
    Slash,
    /// Falling to the right: `\`.
    Backslash,
}

/// Terminal condition reported to the game shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Running,
    /// Health reached zero or an enemy crossed the bottom edge.
    PlayerDefeated,
    /// The level scrolled to its end with no hazards left.
    LevelCompleted,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Running)
    }
}
