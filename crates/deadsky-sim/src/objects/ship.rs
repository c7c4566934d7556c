//! Ships: the shared reload/controller core and the two concrete ships.

use rand::Rng;

use deadsky_ai::controller::{Controller, EnemyController, PlayerController};
use deadsky_ai::temper::TemperContext;
use deadsky_core::config::GameConfig;
use deadsky_core::constants::{MAX_WEAPON_LEVEL, MIN_WEAPON_LEVEL};
use deadsky_core::enums::{Faction, ObjectKind};
use deadsky_core::types::{ensure_range, Vector2};
use deadsky_procgen::weighted::pick_bonus;

use super::{Body, GameObject, UpdateContext};

/// Reload timer plus the controller that steers the ship.
#[derive(Debug, Clone)]
pub struct Ship<C> {
    pub reload_remaining: f64,
    pub reload_duration: f64,
    pub controller: C,
}

impl<C: Controller> Ship<C> {
    pub fn new(controller: C, reload_duration: f64) -> Self {
        Self {
            reload_remaining: 0.0,
            reload_duration,
            controller,
        }
    }

    pub fn ready_to_shoot(&self) -> bool {
        self.reload_remaining <= 0.0
    }

    /// Run the controller and move `body` by its intent.
    /// Returns whether the controller asked to fire.
    fn steer(&mut self, body: &mut Body, target_position: Option<Vector2>, dt: f64) -> bool {
        let ctx = TemperContext::new(body.position).with_target(target_position);
        if let Some(x) = self.controller.update(&ctx, dt) {
            body.position.x = x;
        }
        let intent = self.controller.intent();
        body.position += intent.movement_shift * dt;
        self.controller.reset();
        intent.wants_to_shoot
    }

    /// Act on a fire intent. Returns true when a volley leaves the ship.
    fn trigger(&mut self) -> bool {
        let ready = self.ready_to_shoot();
        self.controller.shoot(ready);
        if ready {
            self.reload_remaining = self.reload_duration;
        }
        ready
    }

    fn reload(&mut self, dt: f64) {
        if !self.ready_to_shoot() {
            self.reload_remaining = (self.reload_remaining - dt).max(0.0);
        }
    }
}

/// The player's ship. Health and weapon level change only through
/// collisions.
#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub ship: Ship<PlayerController>,
    pub health: i32,
    pub max_health: i32,
    pub weapon_level: u32,
}

impl PlayerShip {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            ship: Ship::new(
                PlayerController::new(config.player_speed),
                config.player_reload_secs,
            ),
            health: config.player_health,
            max_health: config.player_health,
            weapon_level: MIN_WEAPON_LEVEL,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn controller_mut(&mut self) -> &mut PlayerController {
        &mut self.ship.controller
    }

    pub(crate) fn collide(&mut self, contacts: &[ObjectKind], config: &GameConfig) {
        for kind in contacts {
            match kind {
                ObjectKind::EnemyShip | ObjectKind::EnemyBullet => {
                    self.set_health(self.health - config.collision_damage);
                }
                ObjectKind::HealthBonus => {
                    self.set_health(self.health + config.health_improvement);
                }
                ObjectKind::WeaponBonus => {
                    self.weapon_level =
                        ensure_range(self.weapon_level + 1, MIN_WEAPON_LEVEL, MAX_WEAPON_LEVEL);
                }
                _ => {}
            }
        }
    }

    /// Set health, clamped into `[0, max_health]`.
    pub fn set_health(&mut self, health: i32) {
        self.health = ensure_range(health, 0, self.max_health);
    }

    /// Bullets fired at the current weapon level.
    ///
    /// Odd levels fire one forward bullet, even levels a parallel pair.
    /// From level 3 a diagonal pair is added, from level 5 a sideways pair.
    pub fn volley(&self, body: &Body, config: &GameConfig) -> Vec<GameObject> {
        let origin = body.position;
        let forward = config.player_bullet_velocity;
        let mut bullets = Vec::with_capacity(6);

        if self.weapon_level % 2 == 1 {
            bullets.push((origin, forward));
        } else {
            let offset = Vector2::new(body.radius, 0.0);
            bullets.push((origin - offset, forward));
            bullets.push((origin + offset, forward));
        }
        if self.weapon_level >= 3 {
            bullets.extend(mirrored(origin, config.player_aux_bullet_velocity));
        }
        if self.weapon_level >= 5 {
            bullets.extend(mirrored(origin, config.player_side_bullet_velocity));
        }

        bullets
            .into_iter()
            .map(|(position, velocity)| {
                GameObject::bullet(Faction::Player, position, velocity, config)
            })
            .collect()
    }

    pub(crate) fn update(&mut self, body: &mut Body, ctx: &UpdateContext<'_>) -> Vec<GameObject> {
        let mut created = Vec::new();
        if self.ship.steer(body, None, ctx.dt) && self.ship.trigger() {
            created.extend(self.volley(body, ctx.config));
        }
        self.ship.reload(ctx.dt);
        if !self.is_alive() {
            created.push(GameObject::explode(body.position, ctx.config));
        }
        created
    }
}

/// A velocity and its horizontal mirror, both from `origin`.
fn mirrored(origin: Vector2, velocity: Vector2) -> [(Vector2, Vector2); 2] {
    [
        (origin, velocity),
        (origin, Vector2::new(-velocity.x, velocity.y)),
    ]
}

/// An AI-driven enemy ship.
#[derive(Debug, Clone)]
pub struct EnemyShip {
    pub ship: Ship<EnemyController>,
    pub destroyed: bool,
}

impl EnemyShip {
    pub fn new(controller: EnemyController, config: &GameConfig) -> Self {
        Self {
            ship: Ship::new(controller, config.enemy_reload_secs),
            destroyed: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }

    pub(crate) fn collide(&mut self, contacts: &[ObjectKind]) {
        if contacts
            .iter()
            .any(|kind| matches!(kind, ObjectKind::PlayerShip | ObjectKind::PlayerBullet))
        {
            self.destroyed = true;
        }
    }

    pub(crate) fn update<R: Rng + ?Sized>(
        &mut self,
        body: &mut Body,
        ctx: &UpdateContext<'_>,
        rng: &mut R,
    ) -> Vec<GameObject> {
        let mut created = Vec::new();
        if self.ship.steer(body, ctx.target_position, ctx.dt) && self.ship.trigger() {
            created.push(GameObject::bullet(
                Faction::Enemy,
                body.position,
                ctx.config.enemy_bullet_velocity,
                ctx.config,
            ));
        }
        self.ship.reload(ctx.dt);
        if !self.is_alive() {
            created.push(GameObject::explode(body.position, ctx.config));
            if let Some(kind) = pick_bonus(rng, &ctx.config.probabilities) {
                created.push(GameObject::bonus(kind, body.position, ctx.config));
            }
        }
        created
    }
}
