//! Update system: advances every object and collects what they create.

use std::collections::HashMap;

use hecs::{Entity, World};
use rand::Rng;

use deadsky_core::config::GameConfig;
use deadsky_core::types::Vector2;

use crate::objects::{GameObject, UpdateContext};
use crate::systems::ordered_entities;

/// Positions of live entities that some object is tracking. A dead or
/// despawned target simply has no entry.
fn resolve_targets(world: &World, entities: &[Entity]) -> HashMap<Entity, Vector2> {
    let mut targets = HashMap::new();
    for &entity in entities {
        let target = match world.get::<&GameObject>(entity) {
            Ok(object) => match object.target() {
                Some(target) => target,
                None => continue,
            },
            Err(_) => continue,
        };
        if targets.contains_key(&target) {
            continue;
        }
        if let Ok(object) = world.get::<&GameObject>(target) {
            if object.is_alive() {
                targets.insert(target, object.body.position);
            }
        }
    }
    targets
}

/// Update every object once, in spawn order. Created objects are appended
/// to `spawned`; they join the world only after this pass.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    config: &GameConfig,
    dt: f64,
    rng: &mut R,
    spawned: &mut Vec<GameObject>,
) {
    let entities = ordered_entities(world);
    let targets = resolve_targets(world, &entities);

    for entity in entities {
        let mut object = match world.get::<&mut GameObject>(entity) {
            Ok(object) => object,
            Err(_) => continue,
        };
        let ctx = UpdateContext {
            dt,
            config,
            target_position: object.target().and_then(|t| targets.get(&t).copied()),
        };
        spawned.extend(object.update(&ctx, rng));
    }
}
