//! Core domain types for the workout tracker.
//!
//! This module defines the records built from raw sensor packages:
//! - Workout kinds and their three-letter labels
//! - Common measurements shared by every workout
//! - Per-variant records (running, sports walking, swimming)
//! - The raw sensor package as it arrives from a device

use serde::{Deserialize, Serialize};

// ============================================================================
// Workout Kinds
// ============================================================================

/// Type of workout, identified on the wire by a three-letter label
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    /// Every supported kind, in label table order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Label used by sensor packages
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Display name used in summaries
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Positional field order expected in package data
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    /// Number of values a package of this kind carries
    pub fn arity(self) -> usize {
        self.field_names().len()
    }

    /// Look up a kind by its package label (case-sensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

// ============================================================================
// Workout Records
// ============================================================================

/// Readings every workout carries
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Measurements {
    /// Steps or strokes counted by the sensor
    pub action: u64,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

/// Running workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Running {
    #[serde(flatten)]
    pub base: Measurements,
}

/// Sports walking workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SportsWalking {
    #[serde(flatten)]
    pub base: Measurements,
    /// Centimeters
    pub height: f64,
}

/// Swimming workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Swimming {
    #[serde(flatten)]
    pub base: Measurements,
    /// Pool length in meters
    pub length_pool: f64,
    /// Number of pool lengths swum
    pub count_pool: f64,
}

/// A classified workout record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    /// Kind of this record
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Swimming(_) => WorkoutKind::Swimming,
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking(_) => WorkoutKind::SportsWalking,
        }
    }

    /// Common measurements of this record
    pub fn measurements(&self) -> &Measurements {
        match self {
            Workout::Swimming(w) => &w.base,
            Workout::Running(w) => &w.base,
            Workout::SportsWalking(w) => &w.base,
        }
    }
}

// ============================================================================
// Sensor Input
// ============================================================================

/// One raw package as reported by a tracker
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        assert_eq!(WorkoutKind::from_label("SWM"), Some(WorkoutKind::Swimming));
        assert_eq!(WorkoutKind::from_label("RUN"), Some(WorkoutKind::Running));
        assert_eq!(WorkoutKind::from_label("WLK"), Some(WorkoutKind::SportsWalking));
        assert_eq!(WorkoutKind::from_label("run"), None);
        assert_eq!(WorkoutKind::from_label("XYZ"), None);
    }

    #[test]
    fn test_arity_matches_field_order() {
        assert_eq!(WorkoutKind::Swimming.arity(), 5);
        assert_eq!(WorkoutKind::Running.arity(), 3);
        assert_eq!(WorkoutKind::SportsWalking.arity(), 4);

        for kind in WorkoutKind::ALL {
            assert_eq!(&kind.field_names()[..3], &["action", "duration", "weight"]);
        }
    }

    #[test]
    fn test_package_json_shape() {
        let package: SensorPackage =
            serde_json::from_str(r#"{"workout_type":"RUN","data":[15000,1,75]}"#).unwrap();

        assert_eq!(package, SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
    }
}
