//! Simulation engine for Into the Dead Sky.
//!
//! Owns the hecs world of game objects, steps collision and update passes
//! each tick, streams generated enemies in as the level scrolls and
//! produces `FrameSnapshot`s for the game shell.

pub mod engine;
pub mod level;
pub mod objects;
pub mod systems;

pub use deadsky_core as core;
pub use engine::{SimConfig, Simulation};
