//! Configuration errors.
//!
//! The tick path never fails; the only fallible input is the tuning table.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("probability {field} = {value} is outside [0, 1]")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("{group} probabilities sum to {sum}, which exceeds 1")]
    ProbabilitySum { group: &'static str, sum: f64 },

    #[error("viewport width {width} cannot hold an enemy of radius {radius}")]
    NarrowViewport { width: f64, radius: f64 },

    #[error("formation step is zero, every formation needs a non-zero axis")]
    DegenerateFormation,

    #[error("enemy group size must be at least 1")]
    EmptyGroup,

    #[error("level length {length} ends before the spawn window starts at {window_start}")]
    ShortLevel { length: f64, window_start: f64 },

    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}
