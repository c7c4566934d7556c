//! Game loop: steps the simulation, background and labels, feeds input and
//! hands every frame to the renderer.

use std::time::{Duration, Instant};

use log::info;
use serde::{Deserialize, Serialize};

use deadsky_core::constants::{FRAME_DT, FRAME_RATE, STAR_COUNT};
use deadsky_core::enums::Outcome;
use deadsky_core::state::FrameSnapshot;
use deadsky_sim::Simulation;

use crate::background::Starfield;
use crate::input::InputSource;
use crate::label::Label;
use crate::render::Renderer;

/// Frame budget at the nominal frame rate.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// How each tick's delta is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pacing {
    /// Constant delta, no sleeping. Deterministic.
    Fixed { dt: f64 },
    /// Wall-clock delta, sleeping to the frame budget.
    Realtime,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Fixed { dt: FRAME_DT }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoopConfig {
    pub pacing: Pacing,
    /// Stop after this many ticks even if the game is not over.
    pub max_ticks: Option<u64>,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The closing label expired.
    LabelClosed,
    TickLimit,
}

/// End-of-run report printed by the binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub outcome: Outcome,
    pub stop_reason: StopReason,
    pub final_health: Option<i32>,
    pub weapon_level: Option<u32>,
    pub enemies_released: u32,
    pub enemies_destroyed: u32,
    pub bonuses_collected: u32,
    pub shots_fired: u32,
}

impl RunSummary {
    fn from_snapshot(snapshot: &FrameSnapshot, stop_reason: StopReason) -> Self {
        Self {
            ticks: snapshot.time.tick,
            elapsed_secs: snapshot.time.elapsed_secs,
            outcome: snapshot.outcome,
            stop_reason,
            final_health: snapshot.player.map(|p| p.health),
            weapon_level: snapshot.player.map(|p| p.weapon_level),
            enemies_released: snapshot.stats.enemies_released,
            enemies_destroyed: snapshot.stats.enemies_destroyed,
            bonuses_collected: snapshot.stats.bonuses_collected,
            shots_fired: snapshot.stats.shots_fired,
        }
    }
}

/// The game shell: simulation plus everything drawn around it.
pub struct GameShell {
    sim: Simulation,
    starfield: Starfield,
    label: Option<Label>,
    input: Box<dyn InputSource>,
    renderer: Box<dyn Renderer>,
}

impl GameShell {
    pub fn new(
        sim: Simulation,
        input: Box<dyn InputSource>,
        renderer: Box<dyn Renderer>,
        star_seed: u64,
    ) -> Self {
        let config = sim.config();
        let starfield = Starfield::new(config.viewport, STAR_COUNT, config.level_speed, star_seed);
        Self {
            sim,
            starfield,
            label: Some(Label::start()),
            input,
            renderer,
        }
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Advance one frame by `dt`. The returned flag turns false once a
    /// closing label has expired and the game should end.
    pub fn step(&mut self, dt: f64, last: &FrameSnapshot) -> (FrameSnapshot, bool) {
        let actions = self.input.poll(last);
        self.sim.set_input(actions);

        let snapshot = self.sim.tick(dt);
        self.starfield.update(dt);
        if let Some(label) = &mut self.label {
            label.update(dt);
        }

        let mut keep_running = true;
        if let Some(label) = &self.label {
            if !label.is_alive() {
                keep_running = !label.close_after;
                self.label = None;
            }
        }
        if keep_running && self.label.is_none() {
            self.label = Label::for_outcome(snapshot.outcome);
        }

        self.renderer
            .draw(&snapshot, &self.starfield, self.label.as_ref());
        (snapshot, keep_running)
    }

    /// Run until the closing label expires or the tick limit is hit.
    pub fn run(&mut self, config: &LoopConfig) -> RunSummary {
        info!("Game loop started ({:?})", config.pacing);
        let mut snapshot = self.sim.snapshot();
        let mut next_frame_time = Instant::now();
        let mut last_frame = Instant::now();

        let stop_reason = loop {
            if let Some(limit) = config.max_ticks {
                if snapshot.time.tick >= limit {
                    break StopReason::TickLimit;
                }
            }

            let dt = match config.pacing {
                Pacing::Fixed { dt } => dt,
                Pacing::Realtime => {
                    let now = Instant::now();
                    let dt = (now - last_frame).as_secs_f64();
                    last_frame = now;
                    if snapshot.time.tick == 0 {
                        FRAME_DT
                    } else {
                        dt
                    }
                }
            };

            let (next, keep_running) = self.step(dt, &snapshot);
            snapshot = next;
            if !keep_running {
                break StopReason::LabelClosed;
            }

            if config.pacing == Pacing::Realtime {
                next_frame_time += FRAME_DURATION;
                let now = Instant::now();
                if next_frame_time > now {
                    std::thread::sleep(next_frame_time - now);
                } else if now - next_frame_time > FRAME_DURATION * 2 {
                    // Too far behind, drop the backlog.
                    next_frame_time = now;
                }
            }
        };

        let summary = RunSummary::from_snapshot(&snapshot, stop_reason);
        info!(
            "Game loop stopped after {} ticks: {:?} ({:?})",
            summary.ticks, summary.outcome, stop_reason
        );
        summary
    }
}
