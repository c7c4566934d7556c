//! Headless game shell for Into the Dead Sky.
//!
//! Wires the simulation to an input source, a renderer, a scrolling
//! starfield and on-screen labels, and drives it from a fixed-step or
//! wall-clock game loop.

pub mod background;
pub mod game_loop;
pub mod input;
pub mod label;
pub mod render;

pub use deadsky_core as core;

#[cfg(test)]
mod tests;
