//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` when
//! read-only). State lives in components and in the engine.

pub mod cleanup;
pub mod collision;
pub mod input;
pub mod snapshot;
pub mod update;

use hecs::{Entity, World};

use crate::objects::GameObject;

/// Insertion counter attached to every game object. Iteration and drawing
/// follow this order so results never depend on archetype layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);

/// All game object entities sorted by spawn order.
pub fn ordered_entities(world: &World) -> Vec<Entity> {
    let mut entries: Vec<(SpawnOrder, Entity)> = world
        .query::<(&GameObject, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_, order))| (*order, entity))
        .collect();
    entries.sort_unstable_by_key(|(order, _)| *order);
    entries.into_iter().map(|(_, entity)| entity).collect()
}
