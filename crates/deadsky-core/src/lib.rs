//! Core types and definitions for the Into the Dead Sky simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, tuning constants, configuration, input actions, enums and
//! the frame snapshot handed to renderers. It holds no simulation logic.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
