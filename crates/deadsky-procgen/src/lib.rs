//! Procedural level generation for Into the Dead Sky.
//!
//! Builds the full enemy population of a level up front: weighted archetype
//! draws per group, line formations fitted inside the viewport, and a
//! trigger depth per ship so enemies stream in as the level scrolls.

pub mod formation;
pub mod level;
pub mod weighted;

pub use level::{generate_level, EnemySpawn, GroupPlan, LevelPlan};

#[cfg(test)]
mod tests;
