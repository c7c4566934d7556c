//! Cleanup system: removes dead and off-screen objects.

use hecs::{Entity, World};
use log::info;

use deadsky_core::enums::ObjectKind;
use deadsky_core::state::SimStats;
use deadsky_core::types::Viewport;

use crate::objects::GameObject;

/// Despawn every object that is no longer alive, counting destroyed
/// enemies and collected bonuses.
pub fn despawn_dead(world: &mut World, despawn_buffer: &mut Vec<Entity>, stats: &mut SimStats) {
    despawn_buffer.clear();

    for (entity, object) in world.query_mut::<&GameObject>() {
        if object.is_alive() {
            continue;
        }
        match object.kind() {
            ObjectKind::EnemyShip => stats.enemies_destroyed += 1,
            ObjectKind::HealthBonus | ObjectKind::WeaponBonus => stats.bonuses_collected += 1,
            _ => {}
        }
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// True if any enemy ship reaches past the bottom edge.
pub fn enemy_crossed_bottom(world: &World, viewport: &Viewport) -> bool {
    world
        .query::<&GameObject>()
        .iter()
        .any(|(_, object)| {
            object.kind() == ObjectKind::EnemyShip && object.bounds().bottom() > viewport.height
        })
}

/// Zero the player's health when an enemy got past the bottom edge.
/// Returns true if that happened this call.
pub fn enforce_bottom_line(world: &mut World, player: Entity, viewport: &Viewport) -> bool {
    if !enemy_crossed_bottom(world, viewport) {
        return false;
    }
    if let Ok(mut object) = world.get::<&mut GameObject>(player) {
        if let Some(ship) = object.as_player_mut() {
            if ship.is_alive() {
                info!("Enemy crossed the bottom edge");
            }
            ship.set_health(0);
        }
    }
    true
}

/// Despawn objects whose bounding box left the viewport.
pub fn cull_offscreen(world: &mut World, viewport: &Viewport, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, object) in world.query_mut::<&GameObject>() {
        if !viewport.intersects(&object.bounds()) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
