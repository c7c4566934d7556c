//! Simulation constants and default tuning parameters.
//!
//! These seed `GameConfig::default()`; the simulation itself only reads the
//! config it was constructed with.

// --- Screen ---

/// Default viewport width in pixels.
pub const SCREEN_WIDTH: f64 = 800.0;

/// Default viewport height in pixels.
pub const SCREEN_HEIGHT: f64 = 600.0;

/// Nominal frame rate of the game shell (Hz).
pub const FRAME_RATE: u32 = 30;

/// Seconds per frame at the nominal frame rate.
pub const FRAME_DT: f64 = 1.0 / FRAME_RATE as f64;

// --- Object sizes (bounding circle radii, pixels) ---

pub const PLAYER_RADIUS: f64 = 32.0;
pub const BULLET_RADIUS: f64 = 16.0;
pub const BONUS_RADIUS: f64 = 32.0;
pub const ENEMY_RADIUS: f64 = 32.0;
pub const EXPLODE_RADIUS: f64 = 48.0;

// --- Level ---

/// Scroll speed of the level (pixels per second).
pub const LEVEL_SPEED: f64 = 50.0;

/// Level length in pixels, not counting the first screen.
pub const LEVEL_LENGTH: f64 = 4000.0;

/// Number of enemy groups generated per level.
pub const ENEMY_GROUP_COUNT: usize = 40;

/// Largest number of ships in one group.
pub const ENEMY_GROUP_SIZE: usize = 10;

/// Per-step offset between ships of one formation (pixels).
pub const ENEMY_DISTANCE: f64 = 48.0;

// --- Player ---

/// Player movement speed per held direction (pixels per second).
pub const PLAYER_SPEED: f64 = 400.0;

/// Seconds between player volleys.
pub const PLAYER_RELOAD_SECS: f64 = 0.5;

/// Player hit points.
pub const PLAYER_HEALTH: i32 = 100;

/// Forward bullet velocity (pixels per second).
pub const PLAYER_BULLET_VELOCITY: (f64, f64) = (0.0, -300.0);

/// Right-hand diagonal "auxiliary" bullet velocity; the left one mirrors x.
pub const PLAYER_AUX_BULLET_VELOCITY: (f64, f64) = (212.0, -212.0);

/// Right-hand lateral "side" bullet velocity; the left one mirrors x.
pub const PLAYER_SIDE_BULLET_VELOCITY: (f64, f64) = (300.0, 0.0);

/// Lowest weapon level.
pub const MIN_WEAPON_LEVEL: u32 = 1;

/// Highest weapon level.
pub const MAX_WEAPON_LEVEL: u32 = 6;

// --- Enemies ---

/// Seconds between enemy shots.
pub const ENEMY_RELOAD_SECS: f64 = 0.5;

/// Base enemy speed (pixels per second).
pub const ENEMY_SPEED: f64 = 50.0;

/// Enemy bullet velocity (pixels per second).
pub const ENEMY_BULLET_VELOCITY: (f64, f64) = (0.0, 300.0);

// --- Damage and bonuses ---

/// Hit points lost per enemy ship or enemy bullet contact.
pub const COLLISION_DAMAGE: i32 = 10;

/// Hit points restored by a health bonus.
pub const HEALTH_IMPROVEMENT: i32 = 25;

/// Lifetime of an explosion (seconds).
pub const EXPLODE_DELAY_SECS: f64 = 1.5;

// --- Archetype parameters ---

/// Scout ships move this many times faster than the base enemy speed.
pub const SCOUT_SPEED_FACTOR: f64 = 2.0;

/// Sniper: cooldown after a burst (seconds), shots per burst.
pub const SNIPER_GROUP_DELAY: f64 = 3.0;
pub const SNIPER_GROUP_SIZE: i32 = 1;

/// Gunner: cooldown after a burst (seconds), shots per burst.
pub const GUNNER_GROUP_DELAY: f64 = 3.0;
pub const GUNNER_GROUP_SIZE: i32 = 3;

// --- Default probabilities ---

pub const PROB_CREATE_WEAPON_BONUS: f64 = 0.25;
pub const PROB_CREATE_HEALTH_BONUS: f64 = 0.25;

pub const PROB_SCOUT: f64 = 0.25;
pub const PROB_PENDULUM: f64 = 0.25;
pub const PROB_HUNTER: f64 = 0.25;
pub const PROB_PAWN: f64 = 0.25;

pub const PROB_SNIPER: f64 = 0.33;
pub const PROB_GUNNER: f64 = 0.33;
pub const PROB_NO_SHOOT: f64 = 0.33;

pub const PROB_H_LINE: f64 = 0.25;
pub const PROB_V_LINE: f64 = 0.25;
pub const PROB_SLASH: f64 = 0.25;
pub const PROB_BACKSLASH: f64 = 0.25;

// --- Shell ---

/// Seconds an on-screen label stays visible.
pub const LABEL_DELAY_SECS: f64 = 3.0;

/// Number of background stars.
pub const STAR_COUNT: usize = 500;

pub const START_TEXT: &str = "Get ready!";
pub const WIN_TEXT: &str = "You have passed!";
pub const LOSE_TEXT: &str = "Fail.";
