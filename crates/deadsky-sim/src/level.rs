//! Level scroll countdown and the queue of enemies waiting to enter.

use deadsky_core::config::GameConfig;
use deadsky_procgen::EnemySpawn;

/// Scroll state of the running level.
#[derive(Debug, Clone)]
pub struct Level {
    remaining_length: f64,
    speed: f64,
    pending: Vec<EnemySpawn>,
}

impl Level {
    /// The countdown covers the level plus one screen so the last
    /// scheduled enemies get a chance to scroll in.
    pub fn new(config: &GameConfig, pending: Vec<EnemySpawn>) -> Self {
        Self {
            remaining_length: config.level_length + config.viewport.height,
            speed: config.level_speed,
            pending,
        }
    }

    pub fn remaining_length(&self) -> f64 {
        self.remaining_length
    }

    pub fn pending(&self) -> &[EnemySpawn] {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_length <= 0.0
    }

    /// Scroll by `dt` and hand back every enemy whose trigger depth was
    /// crossed, in queue order. Does nothing once the level is finished.
    pub fn update(&mut self, dt: f64) -> Vec<EnemySpawn> {
        if self.is_finished() {
            return Vec::new();
        }
        self.remaining_length = (self.remaining_length - self.speed * dt).max(0.0);

        let remaining = self.remaining_length;
        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|spawn| spawn.trigger_depth > remaining);
        self.pending = waiting;
        due
    }
}
