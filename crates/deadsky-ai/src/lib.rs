//! Enemy behavior and ship controllers for Into the Dead Sky.
//!
//! Tempers are small strategies (how to move, when to fire) composed into
//! an enemy controller. Controllers turn either tempers or player input
//! into a per-tick movement and fire intent. Nothing here touches the ECS
//! world directly; the simulation resolves positions into a
//! [`temper::TemperContext`] first.

pub mod archetypes;
pub mod controller;
pub mod temper;

pub use deadsky_core as core;
