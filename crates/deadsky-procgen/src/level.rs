//! Level population: groups of enemies scheduled by trigger depth.

use log::{debug, info};
use rand::Rng;

use deadsky_ai::controller::EnemyController;
use deadsky_ai::temper::{MoveTemper, ShootTemper};
use deadsky_core::config::GameConfig;
use deadsky_core::enums::{Formation, MoveArchetype, ShootArchetype};
use deadsky_core::error::ConfigError;

use crate::formation::{
    fit_group_size, formation_positions, formation_step, place_formation, SpawnArea,
};
use crate::weighted::{pick_formation, pick_move, pick_shoot};

/// One enemy waiting to enter play.
#[derive(Debug, Clone)]
pub struct EnemySpawn {
    /// Horizontal position kept on release.
    pub x: f64,
    /// The enemy enters once the remaining level length drops below this.
    pub trigger_depth: f64,
    /// Ready-made controller with its own temper state.
    pub controller: EnemyController,
    /// Index of the group this enemy belongs to.
    pub group: usize,
}

/// Summary of one generated group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPlan {
    pub move_archetype: MoveArchetype,
    pub shoot_archetype: ShootArchetype,
    pub formation: Formation,
    /// Size drawn before fitting.
    pub drawn_size: usize,
    /// Size actually spawned.
    pub size: usize,
}

/// Everything generated for one level.
#[derive(Debug, Clone, Default)]
pub struct LevelPlan {
    pub groups: Vec<GroupPlan>,
    /// Every enemy of every group, in generation order.
    pub spawns: Vec<EnemySpawn>,
}

impl LevelPlan {
    pub fn enemy_count(&self) -> usize {
        self.spawns.len()
    }
}

/// Area enemy centers are scheduled in: fully inside the viewport
/// horizontally, between half a screen and the far end of the level in
/// depth.
pub fn spawn_area(config: &GameConfig) -> SpawnArea {
    SpawnArea {
        min_x: config.enemy_radius,
        max_x: config.viewport.width - config.enemy_radius,
        min_depth: config.spawn_window_start(),
        max_depth: config.level_length,
    }
}

/// Generate the enemy population of a level.
///
/// `player` is the entity hunters chase. The config is validated first;
/// generation itself cannot fail.
pub fn generate_level<R: Rng + ?Sized>(
    config: &GameConfig,
    player: hecs::Entity,
    rng: &mut R,
) -> Result<LevelPlan, ConfigError> {
    config.validate()?;

    let area = spawn_area(config);
    let mut plan = LevelPlan::default();

    for group in 0..config.enemy_group_count {
        let move_archetype = pick_move(rng, &config.probabilities);
        let move_temper = build_move_temper(move_archetype, config, player, rng);

        let shoot_archetype = pick_shoot(rng, &config.probabilities);
        let shoot_temper = ShootTemper::from_archetype(shoot_archetype);

        let formation = pick_formation(rng, &config.probabilities);
        let step = formation_step(formation, config.enemy_distance);

        let drawn_size = rng.gen_range(1..=config.enemy_group_size);
        let size = fit_group_size(drawn_size, step, &area);
        if size < drawn_size {
            debug!(
                "Group {}: {:?} shrunk from {} to {} to fit",
                group, formation, drawn_size, size
            );
        }

        let start = place_formation(rng, step, size, &area);
        debug!(
            "Group {}: {} x {:?}/{:?} in {:?} from ({:.0}, {:.0})",
            group, size, move_archetype, shoot_archetype, formation, start.x, start.y
        );

        let controller = EnemyController::new(move_temper, shoot_temper);
        for position in formation_positions(start, step, size) {
            plan.spawns.push(EnemySpawn {
                x: position.x,
                trigger_depth: position.y,
                controller: controller.clone(),
                group,
            });
        }

        plan.groups.push(GroupPlan {
            move_archetype,
            shoot_archetype,
            formation,
            drawn_size,
            size,
        });
    }

    info!(
        "Generated level: {} groups, {} enemies, length {:.0}",
        plan.groups.len(),
        plan.enemy_count(),
        config.level_length
    );
    Ok(plan)
}

fn build_move_temper<R: Rng + ?Sized>(
    archetype: MoveArchetype,
    config: &GameConfig,
    player: hecs::Entity,
    rng: &mut R,
) -> MoveTemper {
    match archetype {
        MoveArchetype::Pawn => MoveTemper::pawn(config.enemy_speed),
        MoveArchetype::Scout => MoveTemper::scout(config.enemy_speed),
        MoveArchetype::Pendulum => {
            let low = config.enemy_radius;
            let high = config.viewport.width - config.enemy_radius;
            let first = rng.gen_range(low..=high);
            let second = rng.gen_range(low..=high);
            MoveTemper::pendulum(first, second, config.enemy_speed)
        }
        MoveArchetype::Hunter => MoveTemper::hunter(player, config.enemy_speed),
    }
}
