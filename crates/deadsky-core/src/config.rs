//! Tuning configuration passed into the level generator and constructors.
//!
//! A `GameConfig` is immutable once a simulation is built from it. Partial
//! JSON documents are accepted: missing fields fall back to the defaults in
//! `constants`.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::{Vector2, Viewport};

/// Weights for every random draw the game makes.
///
/// Each group is consumed as a cumulative table against one uniform sample;
/// whatever probability mass is left over selects the group's fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityTable {
    pub weapon_bonus: f64,
    pub health_bonus: f64,

    pub scout: f64,
    pub pendulum: f64,
    pub hunter: f64,
    pub pawn: f64,

    pub sniper: f64,
    pub gunner: f64,
    pub no_shoot: f64,

    pub h_line: f64,
    pub v_line: f64,
    pub slash: f64,
    pub backslash: f64,
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        Self {
            weapon_bonus: PROB_CREATE_WEAPON_BONUS,
            health_bonus: PROB_CREATE_HEALTH_BONUS,
            scout: PROB_SCOUT,
            pendulum: PROB_PENDULUM,
            hunter: PROB_HUNTER,
            pawn: PROB_PAWN,
            sniper: PROB_SNIPER,
            gunner: PROB_GUNNER,
            no_shoot: PROB_NO_SHOOT,
            h_line: PROB_H_LINE,
            v_line: PROB_V_LINE,
            slash: PROB_SLASH,
            backslash: PROB_BACKSLASH,
        }
    }
}

impl ProbabilityTable {
    fn validate(&self) -> Result<(), ConfigError> {
        check_group(
            "bonus",
            &[
                ("weapon_bonus", self.weapon_bonus),
                ("health_bonus", self.health_bonus),
            ],
        )?;
        check_group(
            "move temper",
            &[
                ("scout", self.scout),
                ("pendulum", self.pendulum),
                ("hunter", self.hunter),
                ("pawn", self.pawn),
            ],
        )?;
        check_group(
            "shoot temper",
            &[
                ("sniper", self.sniper),
                ("gunner", self.gunner),
                ("no_shoot", self.no_shoot),
            ],
        )?;
        check_group(
            "formation",
            &[
                ("h_line", self.h_line),
                ("v_line", self.v_line),
                ("slash", self.slash),
                ("backslash", self.backslash),
            ],
        )
    }
}

fn check_group(group: &'static str, entries: &[(&'static str, f64)]) -> Result<(), ConfigError> {
    let mut sum = 0.0;
    for &(field, value) in entries {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::ProbabilityOutOfRange { field, value });
        }
        sum += value;
    }
    if sum > 1.0 + 1e-9 {
        return Err(ConfigError::ProbabilitySum { group, sum });
    }
    Ok(())
}

/// Complete tuning table for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport: Viewport,

    pub level_speed: f64,
    pub level_length: f64,

    pub player_radius: f64,
    pub bullet_radius: f64,
    pub bonus_radius: f64,
    pub enemy_radius: f64,
    pub explode_radius: f64,

    pub player_speed: f64,
    pub player_reload_secs: f64,
    pub player_health: i32,
    pub player_bullet_velocity: Vector2,
    pub player_aux_bullet_velocity: Vector2,
    pub player_side_bullet_velocity: Vector2,

    pub enemy_speed: f64,
    pub enemy_reload_secs: f64,
    pub enemy_bullet_velocity: Vector2,

    pub collision_damage: i32,
    pub health_improvement: i32,
    pub explode_delay_secs: f64,

    pub enemy_group_count: usize,
    pub enemy_group_size: usize,
    pub enemy_distance: f64,

    pub probabilities: ProbabilityTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            level_speed: LEVEL_SPEED,
            level_length: LEVEL_LENGTH,
            player_radius: PLAYER_RADIUS,
            bullet_radius: BULLET_RADIUS,
            bonus_radius: BONUS_RADIUS,
            enemy_radius: ENEMY_RADIUS,
            explode_radius: EXPLODE_RADIUS,
            player_speed: PLAYER_SPEED,
            player_reload_secs: PLAYER_RELOAD_SECS,
            player_health: PLAYER_HEALTH,
            player_bullet_velocity: Vector2::from(PLAYER_BULLET_VELOCITY),
            player_aux_bullet_velocity: Vector2::from(PLAYER_AUX_BULLET_VELOCITY),
            player_side_bullet_velocity: Vector2::from(PLAYER_SIDE_BULLET_VELOCITY),
            enemy_speed: ENEMY_SPEED,
            enemy_reload_secs: ENEMY_RELOAD_SECS,
            enemy_bullet_velocity: Vector2::from(ENEMY_BULLET_VELOCITY),
            collision_damage: COLLISION_DAMAGE,
            health_improvement: HEALTH_IMPROVEMENT,
            explode_delay_secs: EXPLODE_DELAY_SECS,
            enemy_group_count: ENEMY_GROUP_COUNT,
            enemy_group_size: ENEMY_GROUP_SIZE,
            enemy_distance: ENEMY_DISTANCE,
            probabilities: ProbabilityTable::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document and validate the result.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// First trigger depth an enemy may be scheduled at.
    pub fn spawn_window_start(&self) -> f64 {
        self.viewport.height / 2.0
    }

    /// Check every construction-time rule the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
            ("level_speed", self.level_speed),
            ("level_length", self.level_length),
            ("player_radius", self.player_radius),
            ("bullet_radius", self.bullet_radius),
            ("bonus_radius", self.bonus_radius),
            ("enemy_radius", self.enemy_radius),
            ("explode_radius", self.explode_radius),
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("explode_delay_secs", self.explode_delay_secs),
            ("player_health", f64::from(self.player_health)),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("player_reload_secs", self.player_reload_secs),
            ("enemy_reload_secs", self.enemy_reload_secs),
            ("collision_damage", f64::from(self.collision_damage)),
            ("health_improvement", f64::from(self.health_improvement)),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.viewport.width < self.enemy_radius * 2.0 {
            return Err(ConfigError::NarrowViewport {
                width: self.viewport.width,
                radius: self.enemy_radius,
            });
        }
        if !(self.enemy_distance > 0.0) {
            return Err(ConfigError::DegenerateFormation);
        }
        if self.enemy_group_size == 0 {
            return Err(ConfigError::EmptyGroup);
        }
        if self.level_length < self.spawn_window_start() {
            return Err(ConfigError::ShortLevel {
                length: self.level_length,
                window_start: self.spawn_window_start(),
            });
        }

        self.probabilities.validate()
    }
}
