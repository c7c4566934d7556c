//! Frame snapshot: everything a renderer needs after one tick.

use serde::{Deserialize, Serialize};

use crate::enums::{ObjectKind, Outcome, Sprite};
use crate::types::{Circle, SimTime, Vector2};

/// Complete visible state produced by each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub outcome: Outcome,
    /// Scroll countdown left before the level ends (pixels).
    pub remaining_length: f64,
    /// Enemies generated but not yet released into play.
    pub pending_enemies: usize,
    /// Active objects in spawn order (first drawn first).
    pub objects: Vec<ObjectView>,
    /// `None` once the player ship has left the active set.
    pub player: Option<PlayerView>,
    pub stats: SimStats,
}

impl FrameSnapshot {
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.objects.iter().filter(|o| o.kind == kind).count()
    }
}

/// One drawable object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectView {
    pub kind: ObjectKind,
    pub sprite: Sprite,
    pub position: Vector2,
    pub radius: f64,
}

impl ObjectView {
    pub fn bounds(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }
}

/// Player ship status for the health bar and HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vector2,
    pub radius: f64,
    pub health: i32,
    pub max_health: i32,
    pub weapon_level: u32,
}

impl PlayerView {
    /// The bar is only drawn while the ship is damaged.
    pub fn needs_health_bar(&self) -> bool {
        self.health < self.max_health
    }

    /// Bar fill color: red at empty, yellow at half, green at full.
    ///
    /// Returns `None` when `max_health` is not positive.
    pub fn health_bar_color(&self) -> Option<[u8; 3]> {
        if self.max_health <= 0 {
            return None;
        }
        let health = i64::from(self.health.clamp(0, self.max_health));
        let max = i64::from(self.max_health);
        let color = if health * 2 < max {
            let i = 255 * 2 * health / max;
            [255, i as u8, 0]
        } else {
            let i = (255 * 2 * (2 * health - max) / (2 * max)).min(255);
            [(255 - i) as u8, 255, 0]
        };
        Some(color)
    }
}

/// Running counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    pub enemies_released: u32,
    pub enemies_destroyed: u32,
    pub bonuses_dropped: u32,
    pub bonuses_collected: u32,
    pub shots_fired: u32,
}
