#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use deadsky_ai::temper::MoveTemper;
    use deadsky_core::config::{GameConfig, ProbabilityTable};
    use deadsky_core::enums::{BonusKind, Formation, MoveArchetype, ShootArchetype};
    use deadsky_core::types::{Vector2, Viewport};

    use crate::formation::{
        fit_group_size, formation_positions, formation_step, place_formation, SpawnArea,
    };
    use crate::level::{generate_level, spawn_area};
    use crate::weighted::{pick_bonus, pick_formation, pick_move, pick_shoot, pick_weighted};

    const ALL_FORMATIONS: [Formation; 4] = [
        Formation::HorizontalLine,
        Formation::VerticalLine,
        Formation::Slash,
        Formation::Backslash,
    ];

    // Float slack for start + step * i against the area bounds.
    const EPS: f64 = 1e-6;

    fn player_entity() -> hecs::Entity {
        hecs::World::new().spawn(())
    }

    fn assert_inside(area: &SpawnArea, point: Vector2) {
        assert!(
            point.x >= area.min_x - EPS && point.x <= area.max_x + EPS,
            "x {} outside [{}, {}]",
            point.x,
            area.min_x,
            area.max_x
        );
        assert!(
            point.y >= area.min_depth - EPS && point.y <= area.max_depth + EPS,
            "depth {} outside [{}, {}]",
            point.y,
            area.min_depth,
            area.max_depth
        );
    }

    // ---- Weighted draws ----

    #[test]
    fn test_pick_weighted_certain_and_fallback() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(pick_weighted(&mut rng, &[('a', 1.0), ('b', 0.0)], 'z'), 'a');
            assert_eq!(pick_weighted(&mut rng, &[('a', 0.0), ('b', 0.0)], 'z'), 'z');
        }
    }

    #[test]
    fn test_pick_weighted_follows_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let table = [(0usize, 0.5), (1usize, 0.25)];
        let mut counts = [0u32; 3];
        for _ in 0..20_000 {
            counts[pick_weighted(&mut rng, &table, 2)] += 1;
        }
        let share = |n: u32| f64::from(n) / 20_000.0;
        assert!((share(counts[0]) - 0.5).abs() < 0.02, "{:?}", counts);
        assert!((share(counts[1]) - 0.25).abs() < 0.02, "{:?}", counts);
        assert!((share(counts[2]) - 0.25).abs() < 0.02, "{:?}", counts);
    }

    #[test]
    fn test_archetype_draws_respect_table() {
        let probs = ProbabilityTable {
            scout: 0.0,
            pendulum: 0.0,
            hunter: 1.0,
            pawn: 0.0,
            sniper: 0.0,
            gunner: 1.0,
            no_shoot: 0.0,
            h_line: 0.0,
            v_line: 0.0,
            slash: 0.0,
            backslash: 1.0,
            weapon_bonus: 0.0,
            health_bonus: 0.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(pick_move(&mut rng, &probs), MoveArchetype::Hunter);
            assert_eq!(pick_shoot(&mut rng, &probs), ShootArchetype::Gunner);
            assert_eq!(pick_formation(&mut rng, &probs), Formation::Backslash);
            assert_eq!(pick_bonus(&mut rng, &probs), None);
        }
    }

    #[test]
    fn test_bonus_draw_is_exclusive() {
        let probs = ProbabilityTable {
            weapon_bonus: 0.5,
            health_bonus: 0.5,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen_weapon = false;
        let mut seen_health = false;
        for _ in 0..500 {
            match pick_bonus(&mut rng, &probs) {
                Some(BonusKind::Weapon) => seen_weapon = true,
                Some(BonusKind::Health) => seen_health = true,
                None => panic!("weights cover the whole range"),
            }
        }
        assert!(seen_weapon && seen_health);
    }

    // ---- Formation geometry ----

    #[test]
    fn test_formation_steps_are_never_zero() {
        for formation in ALL_FORMATIONS {
            let step = formation_step(formation, 48.0);
            assert!(step != Vector2::ZERO, "{:?} has no step", formation);
            assert!(step.y >= 0.0, "formations never grow toward the top");
        }
        assert_eq!(formation_step(Formation::Slash, 48.0), Vector2::new(-48.0, 48.0));
    }

    #[test]
    fn test_fit_group_size_shrinks_for_narrow_area() {
        let area = SpawnArea {
            min_x: 32.0,
            max_x: 68.0,
            min_depth: 300.0,
            max_depth: 4000.0,
        };
        let step = formation_step(Formation::HorizontalLine, 48.0);
        assert_eq!(fit_group_size(10, step, &area), 1);
        let vertical = formation_step(Formation::VerticalLine, 48.0);
        assert_eq!(fit_group_size(10, vertical, &area), 10);
    }

    #[test]
    fn test_fit_group_size_exact_fit() {
        let area = SpawnArea {
            min_x: 0.0,
            max_x: 96.0,
            min_depth: 0.0,
            max_depth: 1000.0,
        };
        let step = formation_step(Formation::HorizontalLine, 48.0);
        assert_eq!(fit_group_size(10, step, &area), 3);
        assert_eq!(fit_group_size(2, step, &area), 2);
        assert_eq!(fit_group_size(0, step, &area), 1, "groups are never empty");
    }

    #[test]
    fn test_slash_starts_from_the_right() {
        let area = SpawnArea {
            min_x: 32.0,
            max_x: 768.0,
            min_depth: 300.0,
            max_depth: 4000.0,
        };
        let step = formation_step(Formation::Slash, 48.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..200 {
            let start = place_formation(&mut rng, step, 10, &area);
            assert!(start.x >= area.min_x + 48.0 * 9.0 - EPS);
            for position in formation_positions(start, step, 10) {
                assert_inside(&area, position);
            }
        }
    }

    // ---- Level generation ----

    #[test]
    fn test_default_level_population() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let plan = generate_level(&config, player_entity(), &mut rng).unwrap();

        assert_eq!(plan.groups.len(), config.enemy_group_count);
        let total: usize = plan.groups.iter().map(|g| g.size).sum();
        assert_eq!(total, plan.enemy_count());
        for group in &plan.groups {
            assert!((1..=config.enemy_group_size).contains(&group.drawn_size));
            assert!(group.size >= 1 && group.size <= group.drawn_size);
        }

        let area = spawn_area(&config);
        for spawn in &plan.spawns {
            assert_inside(&area, Vector2::new(spawn.x, spawn.trigger_depth));
            assert!(spawn.group < plan.groups.len());
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let config = GameConfig::default();
        let player = player_entity();
        let first = generate_level(&config, player, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let second = generate_level(&config, player, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(first.groups, second.groups);
        let layout = |plan: &crate::LevelPlan| -> Vec<(f64, f64)> {
            plan.spawns.iter().map(|s| (s.x, s.trigger_depth)).collect()
        };
        assert_eq!(layout(&first), layout(&second));
    }

    #[test]
    fn test_hunters_bind_player_and_pendulums_stay_on_screen() {
        let config = GameConfig::default();
        let player = player_entity();
        let plan = generate_level(&config, player, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        for spawn in &plan.spawns {
            match spawn.controller.move_temper() {
                MoveTemper::Hunter { target, .. } => assert_eq!(*target, player),
                MoveTemper::Pendulum { min_x, max_x, side_direction, .. } => {
                    assert!(min_x <= max_x);
                    assert!(*min_x >= config.enemy_radius);
                    assert!(*max_x <= config.viewport.width - config.enemy_radius);
                    assert_eq!(*side_direction, 1.0);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_group_members_share_archetypes() {
        let config = GameConfig::default();
        let plan =
            generate_level(&config, player_entity(), &mut ChaCha8Rng::seed_from_u64(13)).unwrap();
        for spawn in &plan.spawns {
            let group = &plan.groups[spawn.group];
            assert_eq!(spawn.controller.move_temper().archetype(), group.move_archetype);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            enemy_distance: 0.0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(generate_level(&config, player_entity(), &mut rng).is_err());
    }

    #[test]
    fn test_zero_groups_is_empty_level() {
        let config = GameConfig {
            enemy_group_count: 0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let plan = generate_level(&config, player_entity(), &mut rng).unwrap();
        assert_eq!(plan.enemy_count(), 0);
        assert!(plan.groups.is_empty());
    }

    proptest! {
        #[test]
        fn prop_formation_stays_in_area(
            formation_index in 0usize..4,
            wanted in 1usize..=10,
            width in 64.0f64..1600.0,
            height in 100.0f64..1200.0,
            extra_length in 0.0f64..4000.0,
            seed in any::<u64>(),
        ) {
            let config = GameConfig {
                viewport: Viewport::new(width, height),
                level_length: height / 2.0 + extra_length,
                ..Default::default()
            };
            let area = spawn_area(&config);
            let step = formation_step(ALL_FORMATIONS[formation_index], config.enemy_distance);
            let size = fit_group_size(wanted, step, &area);
            prop_assert!(size >= 1 && size <= wanted);

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let start = place_formation(&mut rng, step, size, &area);
            for position in formation_positions(start, step, size) {
                prop_assert!(position.x >= area.min_x - EPS && position.x <= area.max_x + EPS);
                prop_assert!(position.y >= area.min_depth - EPS && position.y <= area.max_depth + EPS);
            }
        }

        #[test]
        fn prop_generated_level_stays_in_area(
            width in 64.0f64..1600.0,
            height in 100.0f64..1200.0,
            extra_length in 0.0f64..2000.0,
            group_size in 1usize..=10,
            seed in any::<u64>(),
        ) {
            let config = GameConfig {
                viewport: Viewport::new(width, height),
                level_length: height / 2.0 + extra_length,
                enemy_group_count: 8,
                enemy_group_size: group_size,
                ..Default::default()
            };
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let plan = generate_level(&config, player_entity(), &mut rng).unwrap();
            let area = spawn_area(&config);
            for spawn in &plan.spawns {
                prop_assert!(spawn.x >= area.min_x - EPS && spawn.x <= area.max_x + EPS);
                prop_assert!(
                    spawn.trigger_depth >= area.min_depth - EPS
                        && spawn.trigger_depth <= area.max_depth + EPS
                );
            }
        }
    }
}
