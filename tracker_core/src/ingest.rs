//! Loading sensor packages from files.
//!
//! Two layouts are accepted:
//! - `.csv`: headerless rows of `LABEL,value,value,...` (row width varies by label)
//! - anything else: JSON Lines, one [`SensorPackage`] object per line
//!
//! Unreadable rows are logged and skipped so one bad reading does not hide
//! the rest of the batch.

use crate::{Result, SensorPackage};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load all packages from a file, choosing the layout by extension
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let packages = if is_csv {
        read_csv_packages(path)?
    } else {
        read_jsonl_packages(path)?
    };

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// Read packages from a JSON Lines file
pub fn read_jsonl_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    let reader = BufReader::new(File::open(path)?);
    let mut packages = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<SensorPackage>(&line) {
            Ok(package) => packages.push(package),
            Err(e) => {
                tracing::warn!("Failed to parse package at line {}: {}", line_num + 1, e);
            }
        }
    }

    Ok(packages)
}

/// Read packages from a headerless CSV file
pub fn read_csv_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut packages = Vec::new();

    for (row_num, record) in reader.records().enumerate() {
        let record = record?;
        let mut fields = record.iter();

        let Some(label) = fields.next().filter(|label| !label.is_empty()) else {
            continue;
        };

        let data: std::result::Result<Vec<f64>, _> =
            fields.map(|field| field.parse::<f64>()).collect();

        match data {
            Ok(data) => packages.push(SensorPackage::new(label, data)),
            Err(e) => {
                tracing::warn!("Failed to parse package at row {}: {}", row_num + 1, e);
            }
        }
    }

    Ok(packages)
}
