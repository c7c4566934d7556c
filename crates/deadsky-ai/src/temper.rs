//! Move and shoot tempers.
//!
//! A move temper decides where an enemy drifts each tick; a shoot temper
//! decides when it wants to fire. Each enemy ship owns its own copies, so
//! temper state (pendulum direction, burst counters) is never shared.

use deadsky_core::enums::{MoveArchetype, ShootArchetype};
use deadsky_core::types::{ensure_range, Vector2};

use crate::archetypes::{move_speed_factor, shoot_profile};

/// What a temper may read about the world this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperContext {
    /// Current position of the ship owning the temper.
    pub ship_position: Vector2,
    /// Position of the hunted ship, `None` when there is no live target.
    pub target_position: Option<Vector2>,
}

impl TemperContext {
    pub fn new(ship_position: Vector2) -> Self {
        Self {
            ship_position,
            target_position: None,
        }
    }

    pub fn with_target(mut self, target_position: Option<Vector2>) -> Self {
        self.target_position = target_position;
        self
    }
}

/// Output of one move temper step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveUpdate {
    /// Desired velocity for this tick (pixels per second).
    pub movement: Vector2,
    /// New x coordinate when the temper snapped the ship back into range.
    pub clamped_x: Option<f64>,
}

impl MoveUpdate {
    fn drift(movement: Vector2) -> Self {
        Self {
            movement,
            clamped_x: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveTemper {
    /// Straight down at the base speed.
    Pawn { speed: f64 },
    /// Straight down, faster than a pawn.
    Scout { speed: f64 },
    /// Swings between `min_x` and `max_x` while drifting down.
    Pendulum {
        min_x: f64,
        max_x: f64,
        /// +1 moving right, -1 moving left.
        side_direction: f64,
        speed: f64,
    },
    /// Steers toward the x coordinate of `target`.
    Hunter { target: hecs::Entity, speed: f64 },
}

impl MoveTemper {
    pub fn pawn(enemy_speed: f64) -> Self {
        MoveTemper::Pawn { speed: enemy_speed }
    }

    pub fn scout(enemy_speed: f64) -> Self {
        MoveTemper::Scout {
            speed: enemy_speed * move_speed_factor(MoveArchetype::Scout),
        }
    }

    /// The range bounds may come in either order.
    pub fn pendulum(first_x: f64, second_x: f64, enemy_speed: f64) -> Self {
        MoveTemper::Pendulum {
            min_x: first_x.min(second_x),
            max_x: first_x.max(second_x),
            side_direction: 1.0,
            speed: enemy_speed,
        }
    }

    pub fn hunter(target: hecs::Entity, enemy_speed: f64) -> Self {
        MoveTemper::Hunter {
            target,
            speed: enemy_speed,
        }
    }

    pub fn archetype(&self) -> MoveArchetype {
        match self {
            MoveTemper::Pawn { .. } => MoveArchetype::Pawn,
            MoveTemper::Scout { .. } => MoveArchetype::Scout,
            MoveTemper::Pendulum { .. } => MoveArchetype::Pendulum,
            MoveTemper::Hunter { .. } => MoveArchetype::Hunter,
        }
    }

    /// Entity this temper follows, if any.
    pub fn target(&self) -> Option<hecs::Entity> {
        match self {
            MoveTemper::Hunter { target, .. } => Some(*target),
            _ => None,
        }
    }

    pub fn update(&mut self, ctx: &TemperContext) -> MoveUpdate {
        match self {
            MoveTemper::Pawn { speed } | MoveTemper::Scout { speed } => {
                MoveUpdate::drift(Vector2::new(0.0, *speed))
            }
            MoveTemper::Pendulum {
                min_x,
                max_x,
                side_direction,
                speed,
            } => {
                let x = ctx.ship_position.x;
                let new_x = ensure_range(x, *min_x, *max_x);
                let clamped_x = if new_x != x {
                    *side_direction = -*side_direction;
                    Some(new_x)
                } else {
                    None
                };
                MoveUpdate {
                    movement: Vector2::new(*speed * *side_direction, *speed),
                    clamped_x,
                }
            }
            MoveTemper::Hunter { speed, .. } => match ctx.target_position {
                Some(target) => {
                    let shift = ensure_range(target.x - ctx.ship_position.x, -*speed, *speed);
                    MoveUpdate::drift(Vector2::new(shift, *speed))
                }
                None => MoveUpdate::default(),
            },
        }
    }
}

/// Fire pattern with burst and cooldown counters.
///
/// The ship only fires while `group_size <= 0` and the cooldown has run
/// out. Archetypes with a positive group size therefore never fire; only
/// [`ShootArchetype::NoShoot`] shoots, limited by the ship's reload.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootTemper {
    group_delay: f64,
    group_size: i32,
    delay_remaining: f64,
    shots_remaining: i32,
}

impl ShootTemper {
    pub fn new(group_delay: f64, group_size: i32) -> Self {
        Self {
            group_delay,
            group_size,
            delay_remaining: 0.0,
            shots_remaining: group_size,
        }
    }

    pub fn from_archetype(archetype: ShootArchetype) -> Self {
        let profile = shoot_profile(archetype);
        Self::new(profile.group_delay, profile.group_size)
    }

    pub fn want_to_shoot(&self) -> bool {
        self.group_size <= 0 && self.delay_remaining <= 0.0
    }

    /// Record one shot against the current burst.
    pub fn shoot(&mut self) {
        if !self.want_to_shoot() {
            return;
        }
        self.shots_remaining -= 1;
        if self.shots_remaining <= 0 {
            self.shots_remaining = self.group_size;
            self.delay_remaining = self.group_delay;
        }
    }

    /// Run the cooldown while not wanting to shoot.
    pub fn update(&mut self, dt: f64) {
        if !self.want_to_shoot() {
            self.delay_remaining = (self.delay_remaining - dt).max(0.0);
        }
    }

    pub fn group_delay(&self) -> f64 {
        self.group_delay
    }

    pub fn group_size(&self) -> i32 {
        self.group_size
    }

    pub fn delay_remaining(&self) -> f64 {
        self.delay_remaining
    }

    pub fn shots_remaining(&self) -> i32 {
        self.shots_remaining
    }
}
