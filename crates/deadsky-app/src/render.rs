//! Renderers consuming frame snapshots.

use log::debug;

use deadsky_core::enums::ObjectKind;
use deadsky_core::state::FrameSnapshot;

use crate::background::Starfield;
use crate::label::Label;

/// Draws one frame.
pub trait Renderer {
    fn draw(&mut self, snapshot: &FrameSnapshot, starfield: &Starfield, label: Option<&Label>);
}

/// Logs a one-line summary every `every` frames.
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// One-line frame summary.
pub fn describe_frame(snapshot: &FrameSnapshot, label: Option<&Label>) -> String {
    let mut line = format!(
        "t={:.2}s {:?} left={:.0} pending={} enemies={} bullets={} bonuses={}",
        snapshot.time.elapsed_secs,
        snapshot.outcome,
        snapshot.remaining_length,
        snapshot.pending_enemies,
        snapshot.count(ObjectKind::EnemyShip),
        snapshot.count(ObjectKind::PlayerBullet) + snapshot.count(ObjectKind::EnemyBullet),
        snapshot.count(ObjectKind::HealthBonus) + snapshot.count(ObjectKind::WeaponBonus),
    );
    if let Some(player) = &snapshot.player {
        line.push_str(&format!(
            " hp={}/{} weapon={}",
            player.health, player.max_health, player.weapon_level
        ));
        if player.needs_health_bar() {
            if let Some([r, g, b]) = player.health_bar_color() {
                line.push_str(&format!(" bar=#{:02x}{:02x}{:02x}", r, g, b));
            }
        }
    }
    if let Some(label) = label {
        line.push_str(&format!(" \"{}\"", label.text));
    }
    line
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &FrameSnapshot, starfield: &Starfield, label: Option<&Label>) {
        self.frames += 1;
        if self.frames % self.every != 0 {
            return;
        }
        debug!(
            "{} stars={}",
            describe_frame(snapshot, label),
            starfield.stars().len()
        );
    }
}
