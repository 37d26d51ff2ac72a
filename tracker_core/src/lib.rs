#![forbid(unsafe_code)]

//! Core domain model and formulas for the fitrep workout tracker.
//!
//! This crate provides:
//! - Workout records (running, sports walking, swimming)
//! - Distance, mean speed and calorie formulas
//! - Label-based classification of raw sensor packages
//! - Summary rendering
//! - Package ingestion, configuration and logging

pub mod types;
pub mod error;
pub mod training;
pub mod report;
pub mod package;
pub mod ingest;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use training::Training;
pub use report::SummaryReport;
pub use package::{default_packages, read_package, read_sensor_package, summarize_packages};
pub use ingest::load_packages;
pub use config::Config;
