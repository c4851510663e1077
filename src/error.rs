//! Error types for configuration and construction
//!
//! The simulation itself is total over validated state; everything that can
//! go wrong is caught when a `Tuning` is loaded or a `GameState` is built.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },

    #[error("initial run of {count} segments from index {index} does not fit the world")]
    InitialRun { index: i32, count: u32 },

    #[error("{field} must be strictly ascending")]
    Unordered { field: &'static str },

    #[error("expected {expected} speed tier colors for {thresholds} thresholds, got {got}")]
    TierColorMismatch {
        thresholds: usize,
        expected: usize,
        got: usize,
    },

    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
