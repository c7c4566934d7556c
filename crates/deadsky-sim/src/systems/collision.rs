//! Collision system: all-pairs circle overlap against pre-tick positions.
//!
//! Contacts are gathered for every object before any `collide` call, so the
//! result does not depend on the order objects are visited in.

use hecs::{Entity, World};

use deadsky_core::config::GameConfig;
use deadsky_core::enums::ObjectKind;
use deadsky_core::types::{circles_collide, Circle};

use crate::objects::GameObject;
use crate::systems::ordered_entities;

/// Kinds of every object touching each entity, in spawn order.
/// Entities touching nothing are left out.
pub fn find_contacts(world: &World) -> Vec<(Entity, Vec<ObjectKind>)> {
    let snapshot: Vec<(Entity, Circle, ObjectKind)> = ordered_entities(world)
        .into_iter()
        .filter_map(|entity| {
            let object = world.get::<&GameObject>(entity).ok()?;
            Some((entity, object.bounds(), object.kind()))
        })
        .collect();

    let mut contacts: Vec<Vec<ObjectKind>> = vec![Vec::new(); snapshot.len()];
    for i in 0..snapshot.len() {
        for j in (i + 1)..snapshot.len() {
            if circles_collide(&snapshot[i].1, &snapshot[j].1) {
                contacts[i].push(snapshot[j].2);
                contacts[j].push(snapshot[i].2);
            }
        }
    }

    snapshot
        .into_iter()
        .zip(contacts)
        .filter(|(_, kinds)| !kinds.is_empty())
        .map(|((entity, _, _), kinds)| (entity, kinds))
        .collect()
}

/// Resolve this tick's collisions. Returns the number of objects hit.
pub fn run(world: &mut World, config: &GameConfig) -> usize {
    let contacts = find_contacts(world);
    for (entity, kinds) in &contacts {
        if let Ok(mut object) = world.get::<&mut GameObject>(*entity) {
            object.collide(kinds, config);
        }
    }
    contacts.len()
}
