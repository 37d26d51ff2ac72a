//! Error types for the tracker_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tracker_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The package label is not in the workout table
    #[error("Unknown workout type: {0:?} (expected one of SWM, RUN, WLK)")]
    UnknownWorkoutType(String),

    /// The package data does not match the variant's field list
    #[error("Workout type {label} takes {expected} values, got {got}")]
    Arity {
        label: String,
        expected: usize,
        got: usize,
    },

    /// A field value cannot be bound to its typed slot
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },

    /// A formula divided by a zero-valued field
    #[error("Division by zero: {0} must be nonzero")]
    ZeroDivisor(&'static str),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
