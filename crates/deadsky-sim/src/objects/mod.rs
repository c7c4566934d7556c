//! The game object model.
//!
//! Every active thing in the world is one `GameObject` component: a shared
//! [`Body`] plus a closed set of variant states. Collision rules and
//! per-tick behavior dispatch on the variant.

mod ship;

pub use ship::{EnemyShip, PlayerShip, Ship};

use rand::Rng;

use deadsky_ai::controller::EnemyController;
use deadsky_core::config::GameConfig;
use deadsky_core::enums::{BonusKind, Faction, ObjectKind, Sprite};
use deadsky_core::types::{Circle, Vector2};

/// Position, size and look shared by every object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector2,
    pub radius: f64,
    pub sprite: Sprite,
}

impl Body {
    pub fn new(position: Vector2, radius: f64, sprite: Sprite) -> Self {
        Self {
            position,
            radius,
            sprite,
        }
    }
}

/// Variant-specific state.
#[derive(Debug, Clone)]
pub enum ObjectState {
    /// Stays in place until the delay runs out.
    Explode { remaining_delay: f64 },
    /// Drifts down with the level until the player picks it up.
    Bonus { kind: BonusKind, consumed: bool },
    /// Flies at constant velocity until it hits a ship of the other faction.
    Bullet {
        velocity: Vector2,
        faction: Faction,
        consumed: bool,
    },
    Player(PlayerShip),
    Enemy(EnemyShip),
}

/// Read-only inputs to one object update.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext<'a> {
    pub dt: f64,
    pub config: &'a GameConfig,
    /// Position of the object's hunt target, if it has a live one.
    pub target_position: Option<Vector2>,
}

/// The per-entity game object component.
#[derive(Debug, Clone)]
pub struct GameObject {
    pub body: Body,
    pub state: ObjectState,
}

impl GameObject {
    pub fn explode(position: Vector2, config: &GameConfig) -> Self {
        Self {
            body: Body::new(position, config.explode_radius, Sprite::Explode),
            state: ObjectState::Explode {
                remaining_delay: config.explode_delay_secs,
            },
        }
    }

    pub fn bonus(kind: BonusKind, position: Vector2, config: &GameConfig) -> Self {
        let sprite = match kind {
            BonusKind::Health => Sprite::HealthBonus,
            BonusKind::Weapon => Sprite::WeaponBonus,
        };
        Self {
            body: Body::new(position, config.bonus_radius, sprite),
            state: ObjectState::Bonus {
                kind,
                consumed: false,
            },
        }
    }

    pub fn bullet(
        faction: Faction,
        position: Vector2,
        velocity: Vector2,
        config: &GameConfig,
    ) -> Self {
        let sprite = match faction {
            Faction::Player => Sprite::PlayerBullet,
            Faction::Enemy => Sprite::EnemyBullet,
        };
        Self {
            body: Body::new(position, config.bullet_radius, sprite),
            state: ObjectState::Bullet {
                velocity,
                faction,
                consumed: false,
            },
        }
    }

    pub fn player(position: Vector2, config: &GameConfig) -> Self {
        Self {
            body: Body::new(position, config.player_radius, Sprite::Player),
            state: ObjectState::Player(PlayerShip::new(config)),
        }
    }

    pub fn enemy(position: Vector2, controller: EnemyController, config: &GameConfig) -> Self {
        Self {
            body: Body::new(position, config.enemy_radius, Sprite::Enemy),
            state: ObjectState::Enemy(EnemyShip::new(controller, config)),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match &self.state {
            ObjectState::Explode { .. } => ObjectKind::Explode,
            ObjectState::Bonus { kind, .. } => kind.object_kind(),
            ObjectState::Bullet { faction, .. } => faction.bullet_kind(),
            ObjectState::Player(_) => ObjectKind::PlayerShip,
            ObjectState::Enemy(_) => ObjectKind::EnemyShip,
        }
    }

    pub fn is_alive(&self) -> bool {
        match &self.state {
            ObjectState::Explode { remaining_delay } => *remaining_delay > 0.0,
            ObjectState::Bonus { consumed, .. } | ObjectState::Bullet { consumed, .. } => {
                !*consumed
            }
            ObjectState::Player(player) => player.is_alive(),
            ObjectState::Enemy(enemy) => enemy.is_alive(),
        }
    }

    pub fn bounds(&self) -> Circle {
        Circle::new(self.body.position, self.body.radius)
    }

    pub fn as_player(&self) -> Option<&PlayerShip> {
        match &self.state {
            ObjectState::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerShip> {
        match &mut self.state {
            ObjectState::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&EnemyShip> {
        match &self.state {
            ObjectState::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    /// Entity whose position this object's update needs.
    pub fn target(&self) -> Option<hecs::Entity> {
        self.as_enemy().and_then(|enemy| enemy.ship.controller.target())
    }

    /// React to every object touching this one this tick.
    ///
    /// `contacts` holds the kinds of all touching objects. Collision only
    /// flips flags or adjusts player stats; it never creates objects.
    pub fn collide(&mut self, contacts: &[ObjectKind], config: &GameConfig) {
        match &mut self.state {
            ObjectState::Explode { .. } => {}
            ObjectState::Bonus { consumed, .. } => {
                if contacts.contains(&ObjectKind::PlayerShip) {
                    *consumed = true;
                }
            }
            ObjectState::Bullet {
                faction, consumed, ..
            } => {
                if contacts.contains(&faction.foe_ship()) {
                    *consumed = true;
                }
            }
            ObjectState::Player(player) => player.collide(contacts, config),
            ObjectState::Enemy(enemy) => enemy.collide(contacts),
        }
    }

    /// Advance one tick. Returns the objects created this tick.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        ctx: &UpdateContext<'_>,
        rng: &mut R,
    ) -> Vec<GameObject> {
        match &mut self.state {
            ObjectState::Explode { remaining_delay } => {
                if *remaining_delay > 0.0 {
                    *remaining_delay -= ctx.dt;
                }
                Vec::new()
            }
            ObjectState::Bonus { .. } => {
                self.body.position.y += ctx.config.level_speed * ctx.dt;
                Vec::new()
            }
            ObjectState::Bullet { velocity, .. } => {
                self.body.position += *velocity * ctx.dt;
                Vec::new()
            }
            ObjectState::Player(player) => player.update(&mut self.body, ctx),
            ObjectState::Enemy(enemy) => enemy.update(&mut self.body, ctx, rng),
        }
    }
}
