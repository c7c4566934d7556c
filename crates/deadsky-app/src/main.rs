use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use deadsky_app::game_loop::{GameShell, LoopConfig, Pacing};
use deadsky_app::input::{AutopilotInput, IdleInput, InputSource};
use deadsky_app::render::LogRenderer;
use deadsky_core::config::GameConfig;
use deadsky_core::constants::FRAME_DT;
use deadsky_sim::{SimConfig, Simulation};

#[derive(Parser, Debug)]
#[command(name = "deadsky")]
#[command(about = "Headless runner for the Into the Dead Sky shoot'em up")]
struct Cli {
    /// Seed for level generation and every other random draw
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Fixed tick delta in seconds (ignored with --realtime)
    #[arg(long, default_value_t = FRAME_DT)]
    dt: f64,
    /// JSON file overriding any subset of the tuning values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pace ticks by the wall clock at 30 Hz
    #[arg(long, default_value_t = false)]
    realtime: bool,
    #[arg(long, value_enum, default_value_t = InputMode::Autopilot)]
    input: InputMode,
    /// Log a frame summary every N frames (shown with RUST_LOG=debug)
    #[arg(long, default_value_t = 30)]
    render_every: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputMode {
    /// Never touch the controls
    Idle,
    /// Track the nearest enemy and keep firing
    Autopilot,
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let path = match path {
        Some(path) => path,
        None => return Ok(GameConfig::default()),
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    GameConfig::from_json_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if !cli.realtime && !(cli.dt > 0.0 && cli.dt.is_finite()) {
        bail!("--dt must be a positive number of seconds, got {}", cli.dt);
    }

    let game = load_config(cli.config.as_deref())?;
    let sim = Simulation::new(SimConfig {
        seed: cli.seed,
        game,
    })
    .context("failed to start simulation")?;

    let input: Box<dyn InputSource> = match cli.input {
        InputMode::Idle => Box::new(IdleInput),
        InputMode::Autopilot => Box::new(AutopilotInput::default()),
    };
    let renderer = Box::new(LogRenderer::new(cli.render_every));
    let mut shell = GameShell::new(sim, input, renderer, cli.seed.wrapping_add(1));

    let pacing = if cli.realtime {
        Pacing::Realtime
    } else {
        Pacing::Fixed { dt: cli.dt }
    };
    let summary = shell.run(&LoopConfig {
        pacing,
        max_ticks: cli.max_ticks,
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
