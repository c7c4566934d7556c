#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use deadsky_core::commands::{ActionSet, InputAction};
    use deadsky_core::config::GameConfig;
    use deadsky_core::constants::*;
    use deadsky_core::enums::{ObjectKind, Outcome, Sprite};
    use deadsky_core::state::{FrameSnapshot, ObjectView, PlayerView};
    use deadsky_core::types::{Vector2, Viewport};
    use deadsky_sim::{SimConfig, Simulation};

    use crate::background::Starfield;
    use crate::game_loop::{GameShell, LoopConfig, Pacing, StopReason};
    use crate::input::{AutopilotInput, IdleInput, InputSource, ScriptedInput};
    use crate::label::Label;
    use crate::render::{describe_frame, LogRenderer, Renderer};

    const DT: f64 = 1.0 / 30.0;

    /// Records the label text of every drawn frame.
    struct RecordingRenderer {
        labels: Rc<RefCell<Vec<Option<String>>>>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, _snapshot: &FrameSnapshot, _stars: &Starfield, label: Option<&Label>) {
            self.labels
                .borrow_mut()
                .push(label.map(|l| l.text.clone()));
        }
    }

    fn short_level() -> GameConfig {
        GameConfig {
            enemy_group_count: 0,
            level_length: 300.0,
            level_speed: 900.0,
            ..Default::default()
        }
    }

    fn shell_for(game: GameConfig) -> (GameShell, Rc<RefCell<Vec<Option<String>>>>) {
        let sim = Simulation::new(SimConfig { seed: 5, game }).unwrap();
        let labels = Rc::new(RefCell::new(Vec::new()));
        let renderer = RecordingRenderer {
            labels: Rc::clone(&labels),
        };
        let shell = GameShell::new(sim, Box::new(IdleInput), Box::new(renderer), 6);
        (shell, labels)
    }

    fn snapshot_with(player_x: f64, enemies: &[Vector2]) -> FrameSnapshot {
        FrameSnapshot {
            objects: enemies
                .iter()
                .map(|&position| ObjectView {
                    kind: ObjectKind::EnemyShip,
                    sprite: Sprite::Enemy,
                    position,
                    radius: ENEMY_RADIUS,
                })
                .collect(),
            player: Some(PlayerView {
                position: Vector2::new(player_x, 500.0),
                radius: PLAYER_RADIUS,
                health: 100,
                max_health: 100,
                weapon_level: 1,
            }),
            ..Default::default()
        }
    }

    // ---- Starfield ----

    #[test]
    fn test_starfield_scrolls_and_wraps() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut stars = Starfield::new(viewport, 200, LEVEL_SPEED, 1);
        assert_eq!(stars.stars().len(), 200);
        let before: Vec<Vector2> = stars.stars().to_vec();

        stars.update(0.5);
        for (old, new) in before.iter().zip(stars.stars()) {
            if old.y + 25.0 <= 600.0 {
                assert_eq!(new.y, old.y + 25.0);
                assert_eq!(new.x, old.x);
            } else {
                assert_eq!(new.y, 0.0, "wrapped stars restart at the top");
            }
            assert!((0.0..800.0).contains(&new.x));
        }
    }

    #[test]
    fn test_starfield_is_seeded() {
        let viewport = Viewport::new(800.0, 600.0);
        let a = Starfield::new(viewport, 50, LEVEL_SPEED, 9);
        let b = Starfield::new(viewport, 50, LEVEL_SPEED, 9);
        assert_eq!(a.stars(), b.stars());
    }

    // ---- Labels ----

    #[test]
    fn test_label_lifetime() {
        let mut label = Label::start();
        assert_eq!(label.text, START_TEXT);
        assert!(!label.close_after);
        label.update(2.0);
        assert!(label.is_alive());
        label.update(1.0);
        assert!(!label.is_alive());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Label::for_outcome(Outcome::Running), None);
        let lose = Label::for_outcome(Outcome::PlayerDefeated).unwrap();
        assert_eq!(lose.text, LOSE_TEXT);
        assert!(lose.close_after);
        let win = Label::for_outcome(Outcome::LevelCompleted).unwrap();
        assert_eq!(win.text, WIN_TEXT);
    }

    // ---- Input ----

    #[test]
    fn test_scripted_input_replays_then_idles() {
        let up: ActionSet = [InputAction::MoveUp].into_iter().collect();
        let shoot: ActionSet = [InputAction::Shoot].into_iter().collect();
        let mut input = ScriptedInput::new(vec![up, shoot]);
        let last = FrameSnapshot::default();
        assert_eq!(input.poll(&last), up);
        assert_eq!(input.poll(&last), shoot);
        assert!(input.poll(&last).is_empty());
        assert!(IdleInput.poll(&last).is_empty());
    }

    #[test]
    fn test_autopilot_tracks_nearest_enemy() {
        let mut pilot = AutopilotInput::default();
        let snapshot = snapshot_with(
            400.0,
            &[Vector2::new(100.0, 100.0), Vector2::new(600.0, 400.0)],
        );
        let actions = pilot.poll(&snapshot);
        assert!(actions.contains(InputAction::Shoot));
        assert!(actions.contains(InputAction::MoveRight));
        assert!(!actions.contains(InputAction::MoveLeft));

        let lined_up = snapshot_with(400.0, &[Vector2::new(404.0, 100.0)]);
        let actions = pilot.poll(&lined_up);
        assert!(!actions.contains(InputAction::MoveRight));
        assert!(!actions.contains(InputAction::MoveLeft));
    }

    #[test]
    fn test_autopilot_idle_without_player() {
        let mut pilot = AutopilotInput::default();
        assert!(pilot.poll(&FrameSnapshot::default()).is_empty());
    }

    // ---- Rendering ----

    #[test]
    fn test_frame_description_shows_health_bar_when_damaged() {
        let mut snapshot = snapshot_with(400.0, &[]);
        assert!(!describe_frame(&snapshot, None).contains("bar="));

        if let Some(player) = &mut snapshot.player {
            player.health = 50;
        }
        let label = Label::start();
        let line = describe_frame(&snapshot, Some(&label));
        assert!(line.contains("hp=50/100"));
        assert!(line.contains("bar=#ffff00"), "{}", line);
        assert!(line.contains(START_TEXT));
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut renderer = LogRenderer::new(0);
        let stars = Starfield::new(Viewport::new(800.0, 600.0), 10, LEVEL_SPEED, 2);
        for _ in 0..3 {
            renderer.draw(&FrameSnapshot::default(), &stars, None);
        }
        assert_eq!(renderer.frames(), 3);
    }

    // ---- Game loop ----

    #[test]
    fn test_shell_shows_start_label_first() {
        let (mut shell, labels) = shell_for(short_level());
        assert_eq!(shell.label().map(|l| l.text.as_str()), Some(START_TEXT));
        let last = shell.simulation().snapshot();
        let (_, keep_running) = shell.step(DT, &last);
        assert!(keep_running);
        assert_eq!(labels.borrow()[0].as_deref(), Some(START_TEXT));
    }

    #[test]
    fn test_win_label_closes_the_game() {
        let (mut shell, labels) = shell_for(short_level());
        let summary = shell.run(&LoopConfig {
            pacing: Pacing::Fixed { dt: DT },
            max_ticks: Some(1000),
        });

        assert_eq!(summary.stop_reason, StopReason::LabelClosed);
        assert_eq!(summary.outcome, Outcome::LevelCompleted);
        assert_eq!(summary.final_health, Some(PLAYER_HEALTH));
        // Start label for 3 s, then the win label for 3 s.
        assert!(summary.ticks >= 170 && summary.ticks <= 190, "{}", summary.ticks);
        assert!(labels
            .borrow()
            .iter()
            .any(|l| l.as_deref() == Some(WIN_TEXT)));
    }

    #[test]
    fn test_tick_limit_stops_the_loop() {
        let (mut shell, _) = shell_for(GameConfig::default());
        let summary = shell.run(&LoopConfig {
            pacing: Pacing::Fixed { dt: DT },
            max_ticks: Some(10),
        });
        assert_eq!(summary.stop_reason, StopReason::TickLimit);
        assert_eq!(summary.ticks, 10);
        assert_eq!(summary.outcome, Outcome::Running);
    }

    #[test]
    fn test_summary_serializes() {
        let (mut shell, _) = shell_for(short_level());
        let summary = shell.run(&LoopConfig {
            pacing: Pacing::Fixed { dt: DT },
            max_ticks: Some(5),
        });
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"stop_reason\":\"TickLimit\""));
    }
}
