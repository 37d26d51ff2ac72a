//! Summary values and their text rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived metrics for one workout, ready to render
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SummaryReport {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// km/h
    pub speed: f64,
    pub calories: f64,
}

impl SummaryReport {
    /// Render the one-line summary shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
