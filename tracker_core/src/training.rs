//! Distance, speed and calorie formulas for each workout.
//!
//! Every record implements [`Training`]. Distance and mean speed have shared
//! defaults; calories have none, so each variant must supply its own formula.

use crate::{
    Error, Measurements, Result, Running, SportsWalking, SummaryReport, Swimming, Workout,
    WorkoutKind,
};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Metric computations shared by all workout records
pub trait Training {
    /// Distance covered per unit of `action`, in meters
    const LEN_STEP: f64 = 0.65;

    const KIND: WorkoutKind;

    fn measurements(&self) -> &Measurements;

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        self.measurements().action as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> Result<f64> {
        checked_div(self.distance(), self.measurements().duration, "duration")
    }

    /// Calories spent over the whole workout
    fn spent_calories(&self) -> Result<f64>;

    /// Build the summary for this workout
    fn show_training_info(&self) -> Result<SummaryReport> {
        let distance = self.distance();
        let speed = self.mean_speed()?;
        let calories = self.spent_calories()?;

        Ok(SummaryReport {
            training_type: Self::KIND.name().to_string(),
            duration: self.measurements().duration,
            distance,
            speed,
            calories,
        })
    }
}

impl Running {
    pub const COEFF_CALORIE_1: f64 = 18.0;
    pub const COEFF_CALORIE_2: f64 = 20.0;
}

impl Training for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;

    fn measurements(&self) -> &Measurements {
        &self.base
    }

    fn spent_calories(&self) -> Result<f64> {
        let base = &self.base;
        Ok(
            (Self::COEFF_CALORIE_1 * self.mean_speed()? - Self::COEFF_CALORIE_2) * base.weight
                / M_IN_KM
                * base.duration
                * MIN_IN_HOUR,
        )
    }
}

impl SportsWalking {
    pub const COEFF_CALORIE_1: f64 = 0.035;
    pub const COEFF_CALORIE_2: f64 = 0.029;
}

impl Training for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::SportsWalking;

    fn measurements(&self) -> &Measurements {
        &self.base
    }

    fn spent_calories(&self) -> Result<f64> {
        let base = &self.base;
        let speed = self.mean_speed()?;
        // Floor division, not a true quotient.
        let speed_by_height = floor_div(speed.powi(2), self.height, "height")?;

        Ok((Self::COEFF_CALORIE_1 * base.weight
            + speed_by_height * Self::COEFF_CALORIE_2 * base.weight)
            * base.duration
            * MIN_IN_HOUR)
    }
}

impl Swimming {
    pub const COEFF_CALORIE_1: f64 = 1.1;
    pub const COEFF_CALORIE_2: f64 = 2.0;
}

impl Training for Swimming {
    const LEN_STEP: f64 = 1.38;
    const KIND: WorkoutKind = WorkoutKind::Swimming;

    fn measurements(&self) -> &Measurements {
        &self.base
    }

    fn mean_speed(&self) -> Result<f64> {
        checked_div(
            self.length_pool * self.count_pool / M_IN_KM,
            self.base.duration,
            "duration",
        )
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((self.mean_speed()? + Self::COEFF_CALORIE_1) * Self::COEFF_CALORIE_2 * self.base.weight)
    }
}

impl Workout {
    /// Distance in kilometers
    pub fn distance(&self) -> f64 {
        match self {
            Workout::Swimming(w) => w.distance(),
            Workout::Running(w) => w.distance(),
            Workout::SportsWalking(w) => w.distance(),
        }
    }

    /// Mean speed in km/h
    pub fn mean_speed(&self) -> Result<f64> {
        match self {
            Workout::Swimming(w) => w.mean_speed(),
            Workout::Running(w) => w.mean_speed(),
            Workout::SportsWalking(w) => w.mean_speed(),
        }
    }

    /// Calories spent over the whole workout
    pub fn spent_calories(&self) -> Result<f64> {
        match self {
            Workout::Swimming(w) => w.spent_calories(),
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
        }
    }

    /// Build the summary for this workout
    pub fn summary(&self) -> Result<SummaryReport> {
        match self {
            Workout::Swimming(w) => w.show_training_info(),
            Workout::Running(w) => w.show_training_info(),
            Workout::SportsWalking(w) => w.show_training_info(),
        }
    }
}

fn checked_div(lhs: f64, rhs: f64, field: &'static str) -> Result<f64> {
    if rhs == 0.0 {
        return Err(Error::ZeroDivisor(field));
    }
    Ok(lhs / rhs)
}

/// Float floor division with the sign and rounding rules of a
/// modulo-based floor quotient (remainder takes the divisor's sign).
fn floor_div(lhs: f64, rhs: f64, field: &'static str) -> Result<f64> {
    if rhs == 0.0 {
        return Err(Error::ZeroDivisor(field));
    }

    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && ((rhs < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div == 0.0 {
        return Ok(0.0_f64.copysign(lhs / rhs));
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    Ok(floored)
}
