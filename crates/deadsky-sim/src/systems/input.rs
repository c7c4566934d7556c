//! Input system: forwards held actions to the player controller.

use hecs::{Entity, World};

use deadsky_core::commands::{ActionSet, InputAction};
use deadsky_core::types::{Circle, Viewport};

use crate::objects::GameObject;

/// Whether `action` may move a ship with `bounds` any further. A ship
/// already touching an edge ignores presses toward it.
pub fn action_allowed(action: InputAction, bounds: &Circle, viewport: &Viewport) -> bool {
    match action {
        InputAction::MoveUp => bounds.top() > 0.0,
        InputAction::MoveDown => bounds.bottom() < viewport.height,
        InputAction::MoveLeft => bounds.left() > 0.0,
        InputAction::MoveRight => bounds.right() < viewport.width,
        InputAction::Shoot => true,
    }
}

/// Press every allowed held action on the player's controller.
/// Does nothing once the player is dead or gone.
pub fn run(world: &mut World, player: Entity, actions: ActionSet, viewport: &Viewport) {
    let mut object = match world.get::<&mut GameObject>(player) {
        Ok(object) => object,
        Err(_) => return,
    };
    let bounds = object.bounds();
    let ship = match object.as_player_mut() {
        Some(ship) if ship.is_alive() => ship,
        _ => return,
    };
    for action in actions.iter() {
        if action_allowed(action, &bounds, viewport) {
            ship.controller_mut().press(action);
        }
    }
}
