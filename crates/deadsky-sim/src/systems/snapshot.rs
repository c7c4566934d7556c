//! Snapshot system: builds a `FrameSnapshot` from the world.
//!
//! Read-only; never modifies the world.

use hecs::{Entity, World};

use deadsky_core::enums::Outcome;
use deadsky_core::state::{FrameSnapshot, ObjectView, PlayerView, SimStats};
use deadsky_core::types::SimTime;

use crate::level::Level;
use crate::objects::GameObject;
use crate::systems::ordered_entities;

pub fn build_snapshot(
    world: &World,
    player: Entity,
    level: &Level,
    time: &SimTime,
    outcome: Outcome,
    stats: &SimStats,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        outcome,
        remaining_length: level.remaining_length(),
        pending_enemies: level.pending_count(),
        objects: build_objects(world),
        player: build_player(world, player),
        stats: *stats,
    }
}

/// Every object in spawn order.
fn build_objects(world: &World) -> Vec<ObjectView> {
    ordered_entities(world)
        .into_iter()
        .filter_map(|entity| {
            let object = world.get::<&GameObject>(entity).ok()?;
            Some(ObjectView {
                kind: object.kind(),
                sprite: object.body.sprite,
                position: object.body.position,
                radius: object.body.radius,
            })
        })
        .collect()
}

fn build_player(world: &World, player: Entity) -> Option<PlayerView> {
    let object = world.get::<&GameObject>(player).ok()?;
    let ship = object.as_player()?;
    Some(PlayerView {
        position: object.body.position,
        radius: object.body.radius,
        health: ship.health,
        max_health: ship.max_health,
        weapon_level: ship.weapon_level,
    })
}
