//! Ship controllers.
//!
//! A controller holds the intent for the current tick. The owning ship
//! reads it after `update`, applies it, then calls `reset`.

use deadsky_core::commands::InputAction;
use deadsky_core::types::Vector2;

use crate::temper::{MoveTemper, ShootTemper, TemperContext};

/// Movement and fire wish for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intent {
    /// Velocity to apply this tick (pixels per second).
    pub movement_shift: Vector2,
    pub wants_to_shoot: bool,
}

pub trait Controller {
    /// Recompute the intent. Returns a corrected x coordinate when the
    /// controller needs the ship snapped back inside a range.
    fn update(&mut self, ctx: &TemperContext, dt: f64) -> Option<f64>;

    /// Told that the ship acted on a fire intent. `ship_ready` is the
    /// ship's reload state at that moment.
    fn shoot(&mut self, ship_ready: bool);

    /// Clear the intent once the ship consumed it.
    fn reset(&mut self);

    fn intent(&self) -> Intent;
}

/// Accumulates held input into an intent. Presses within one tick add up.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerController {
    speed: f64,
    intent: Intent,
}

impl PlayerController {
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            intent: Intent::default(),
        }
    }

    pub fn press(&mut self, action: InputAction) {
        match action {
            InputAction::MoveUp => self.press_up(),
            InputAction::MoveDown => self.press_down(),
            InputAction::MoveLeft => self.press_left(),
            InputAction::MoveRight => self.press_right(),
            InputAction::Shoot => self.press_shoot(),
        }
    }

    pub fn press_up(&mut self) {
        self.intent.movement_shift.y -= self.speed;
    }

    pub fn press_down(&mut self) {
        self.intent.movement_shift.y += self.speed;
    }

    pub fn press_left(&mut self) {
        self.intent.movement_shift.x -= self.speed;
    }

    pub fn press_right(&mut self) {
        self.intent.movement_shift.x += self.speed;
    }

    pub fn press_shoot(&mut self) {
        self.intent.wants_to_shoot = true;
    }
}

impl Controller for PlayerController {
    fn update(&mut self, _ctx: &TemperContext, _dt: f64) -> Option<f64> {
        None
    }

    fn shoot(&mut self, _ship_ready: bool) {
        self.intent.wants_to_shoot = false;
    }

    fn reset(&mut self) {
        self.intent = Intent::default();
    }

    fn intent(&self) -> Intent {
        self.intent
    }
}

/// AI controller composed of one move temper and one shoot temper.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyController {
    move_temper: MoveTemper,
    shoot_temper: ShootTemper,
    intent: Intent,
}

impl EnemyController {
    pub fn new(move_temper: MoveTemper, shoot_temper: ShootTemper) -> Self {
        Self {
            move_temper,
            shoot_temper,
            intent: Intent::default(),
        }
    }

    pub fn move_temper(&self) -> &MoveTemper {
        &self.move_temper
    }

    pub fn shoot_temper(&self) -> &ShootTemper {
        &self.shoot_temper
    }

    /// Entity whose position must be supplied in the [`TemperContext`].
    pub fn target(&self) -> Option<hecs::Entity> {
        self.move_temper.target()
    }
}

impl Controller for EnemyController {
    fn update(&mut self, ctx: &TemperContext, dt: f64) -> Option<f64> {
        self.shoot_temper.update(dt);
        let step = self.move_temper.update(ctx);
        if self.shoot_temper.want_to_shoot() {
            self.intent.wants_to_shoot = true;
        }
        self.intent.movement_shift = step.movement;
        step.clamped_x
    }

    fn shoot(&mut self, ship_ready: bool) {
        if ship_ready {
            self.shoot_temper.shoot();
        }
        self.intent.wants_to_shoot = false;
    }

    fn reset(&mut self) {
        self.intent = Intent::default();
    }

    fn intent(&self) -> Intent {
        self.intent
    }
}
