//! Input sources feeding the player controller.

use deadsky_core::commands::{ActionSet, InputAction};
use deadsky_core::enums::ObjectKind;
use deadsky_core::state::FrameSnapshot;

/// Produces the set of held actions once per tick.
pub trait InputSource {
    /// `last` is the snapshot from the previous tick.
    fn poll(&mut self, last: &FrameSnapshot) -> ActionSet;
}

/// Holds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn poll(&mut self, _last: &FrameSnapshot) -> ActionSet {
        ActionSet::new()
    }
}

/// Replays a fixed list of action sets, then holds nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<ActionSet>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<ActionSet>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _last: &FrameSnapshot) -> ActionSet {
        let actions = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        actions
    }
}

/// Keeps shooting and slides under the nearest enemy ship.
#[derive(Debug, Clone, Copy)]
pub struct AutopilotInput {
    /// Horizontal distance considered lined up (pixels).
    pub tolerance: f64,
}

impl Default for AutopilotInput {
    fn default() -> Self {
        Self { tolerance: 8.0 }
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self, last: &FrameSnapshot) -> ActionSet {
        let mut actions = ActionSet::new();
        let player = match last.player {
            Some(player) => player,
            None => return actions,
        };
        actions.insert(InputAction::Shoot);

        let nearest = last
            .objects
            .iter()
            .filter(|o| o.kind == ObjectKind::EnemyShip)
            .min_by(|a, b| {
                let da = a.position.distance_squared(player.position);
                let db = b.position.distance_squared(player.position);
                da.total_cmp(&db)
            });
        if let Some(enemy) = nearest {
            let dx = enemy.position.x - player.position.x;
            if dx > self.tolerance {
                actions.insert(InputAction::MoveRight);
            } else if dx < -self.tolerance {
                actions.insert(InputAction::MoveLeft);
            }
        }
        actions
    }
}
