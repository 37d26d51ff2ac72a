//! Classification of raw sensor packages into workout records.
//!
//! Labels map to constructors through a fixed lookup table. Each constructor
//! binds the package data positionally: common measurements first, then the
//! variant's own fields.

use crate::{
    Error, Measurements, Result, Running, SensorPackage, SportsWalking, Swimming, Workout,
    WorkoutKind,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Constructor = fn(&[f64]) -> Result<Workout>;

/// Label to constructor table, built once
static CONSTRUCTORS: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, Constructor> = HashMap::new();
    table.insert(WorkoutKind::Swimming.label(), build_swimming);
    table.insert(WorkoutKind::Running.label(), build_running);
    table.insert(WorkoutKind::SportsWalking.label(), build_sports_walking);
    table
});

/// Build the workout record described by a label and its raw data
///
/// Fails with [`Error::UnknownWorkoutType`] before any binding happens when
/// the label is not in the table.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let constructor = CONSTRUCTORS
        .get(workout_type)
        .ok_or_else(|| Error::UnknownWorkoutType(workout_type.to_string()))?;

    let workout = constructor(data)?;
    tracing::debug!("Read {} package with {} values", workout_type, data.len());
    Ok(workout)
}

/// Build the workout record for a deserialized package
pub fn read_sensor_package(package: &SensorPackage) -> Result<Workout> {
    read_package(&package.workout_type, &package.data)
}

/// Render the summary line for each package, in input order
///
/// A failing package yields its error in place; the rest are still processed.
pub fn summarize_packages(packages: &[SensorPackage]) -> Vec<Result<String>> {
    packages
        .iter()
        .map(|package| {
            let workout = read_sensor_package(package)?;
            Ok(workout.summary()?.message())
        })
        .collect()
}

/// Demonstration packages covering every workout type
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn bind<const N: usize>(kind: WorkoutKind, data: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(data).map_err(|_| Error::Arity {
        label: kind.label().to_string(),
        expected: N,
        got: data.len(),
    })
}

/// Largest step count that converts to and from `f64` without loss (2^53)
const MAX_ACTION: f64 = 9_007_199_254_740_992.0;

fn measurements(action: f64, duration: f64, weight: f64) -> Result<Measurements> {
    if !action.is_finite() || action < 0.0 || action > MAX_ACTION || action.fract() != 0.0 {
        return Err(Error::InvalidField {
            field: "action",
            value: action,
        });
    }

    Ok(Measurements {
        action: action as u64,
        duration,
        weight,
    })
}

fn build_swimming(data: &[f64]) -> Result<Workout> {
    let [action, duration, weight, length_pool, count_pool] =
        bind(WorkoutKind::Swimming, data)?;
    Ok(Workout::Swimming(Swimming {
        base: measurements(action, duration, weight)?,
        length_pool,
        count_pool,
    }))
}

fn build_running(data: &[f64]) -> Result<Workout> {
    let [action, duration, weight] = bind(WorkoutKind::Running, data)?;
    Ok(Workout::Running(Running {
        base: measurements(action, duration, weight)?,
    }))
}

fn build_sports_walking(data: &[f64]) -> Result<Workout> {
    let [action, duration, weight, height] = bind(WorkoutKind::SportsWalking, data)?;
    Ok(Workout::SportsWalking(SportsWalking {
        base: measurements(action, duration, weight)?,
        height,
    }))
}
