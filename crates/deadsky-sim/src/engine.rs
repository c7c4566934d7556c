//! Simulation engine.
//!
//! `Simulation` owns the hecs world, the level queue and the seeded RNG,
//! runs the systems in a fixed order every tick and produces
//! `FrameSnapshot`s. Headless: rendering and input devices live in the
//! game shell.

use hecs::{Entity, World};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use deadsky_core::commands::ActionSet;
use deadsky_core::config::GameConfig;
use deadsky_core::enums::{ObjectKind, Outcome};
use deadsky_core::error::ConfigError;
use deadsky_core::state::{FrameSnapshot, SimStats};
use deadsky_core::types::{SimTime, Vector2};
use deadsky_procgen::generate_level;

use crate::level::Level;
use crate::objects::GameObject;
use crate::systems::{self, SpawnOrder};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs give the same run.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct Simulation {
    world: World,
    config: GameConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    level: Level,
    player: Entity,
    input: ActionSet,
    outcome: Outcome,
    stats: SimStats,
    next_spawn_order: u64,
    despawn_buffer: Vec<Entity>,
    spawn_buffer: Vec<GameObject>,
}

impl Simulation {
    /// Validate the config, place the player at the viewport center and
    /// generate the level's enemy population.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let SimConfig { seed, game } = config;
        game.validate()?;

        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let player = world.spawn((
            GameObject::player(game.viewport.center(), &game),
            SpawnOrder(0),
        ));
        let plan = generate_level(&game, player, &mut rng)?;
        let level = Level::new(&game, plan.spawns);

        info!(
            "Simulation ready: seed {}, {} enemies pending",
            seed,
            level.pending_count()
        );

        Ok(Self {
            world,
            config: game,
            time: SimTime::default(),
            rng,
            level,
            player,
            input: ActionSet::new(),
            outcome: Outcome::Running,
            stats: SimStats::default(),
            next_spawn_order: 1,
            despawn_buffer: Vec::new(),
            spawn_buffer: Vec::new(),
        })
    }

    /// Replace the held actions applied at the start of the next tick.
    pub fn set_input(&mut self, actions: ActionSet) {
        self.input = actions;
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. Negative deltas are treated as zero.
    pub fn tick(&mut self, dt: f64) -> FrameSnapshot {
        let dt = dt.max(0.0);
        self.run_systems(dt);
        self.time.advance(dt);
        self.snapshot()
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            self.player,
            &self.level,
            &self.time,
            self.outcome,
            &self.stats,
        )
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// The player entity. It leaves the world once the ship dies.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Add an object to the active set. It takes part from the next tick on.
    pub fn spawn(&mut self, object: GameObject) -> Entity {
        let order = SpawnOrder(self.next_spawn_order);
        self.next_spawn_order += 1;
        self.world.spawn((object, order))
    }

    /// Mutable world access for tests that set up scenarios directly.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn run_systems(&mut self, dt: f64) {
        let viewport = self.config.viewport;

        // 1. Input
        systems::input::run(&mut self.world, self.player, self.input, &viewport);

        // 2. Level scroll and enemy release
        let released = self.level.update(dt);
        if !released.is_empty() {
            debug!(
                "Released {} enemies, {} pending, {:.0} to go",
                released.len(),
                self.level.pending_count(),
                self.level.remaining_length()
            );
        }
        for spawn in released {
            let enemy = GameObject::enemy(Vector2::new(spawn.x, 0.0), spawn.controller, &self.config);
            self.spawn(enemy);
            self.stats.enemies_released += 1;
        }

        // 3. Collision
        systems::collision::run(&mut self.world, &self.config);

        // 4. Update
        let mut spawned = std::mem::take(&mut self.spawn_buffer);
        systems::update::run(&mut self.world, &self.config, dt, &mut self.rng, &mut spawned);

        // 5. Newly created objects join the active set
        for object in spawned.drain(..) {
            match object.kind() {
                ObjectKind::PlayerBullet | ObjectKind::EnemyBullet => self.stats.shots_fired += 1,
                ObjectKind::HealthBonus | ObjectKind::WeaponBonus => {
                    self.stats.bonuses_dropped += 1
                }
                _ => {}
            }
            self.spawn(object);
        }
        self.spawn_buffer = spawned;

        // 6. Dead objects
        systems::cleanup::despawn_dead(&mut self.world, &mut self.despawn_buffer, &mut self.stats);

        // 7. Enemies past the bottom edge defeat the player
        systems::cleanup::enforce_bottom_line(&mut self.world, self.player, &viewport);

        // 8. Off-screen objects
        systems::cleanup::cull_offscreen(&mut self.world, &viewport, &mut self.despawn_buffer);

        // 9. Outcome
        self.evaluate_outcome();
    }

    fn evaluate_outcome(&mut self) {
        if self.outcome.is_terminal() {
            return;
        }
        let player_alive = self
            .world
            .get::<&GameObject>(self.player)
            .map(|object| object.is_alive())
            .unwrap_or(false);

        let outcome = if !player_alive {
            Outcome::PlayerDefeated
        } else if self.level.is_finished()
            && self.level.pending_count() == 0
            && !self.any_enemy_ship()
        {
            Outcome::LevelCompleted
        } else {
            Outcome::Running
        };

        if outcome.is_terminal() {
            info!(
                "Outcome {:?} at t={:.2}s: {} enemies destroyed",
                outcome, self.time.elapsed_secs, self.stats.enemies_destroyed
            );
            self.outcome = outcome;
        }
    }

    fn any_enemy_ship(&self) -> bool {
        self.world
            .query::<&GameObject>()
            .iter()
            .any(|(_, object)| object.kind() == ObjectKind::EnemyShip)
    }
}
