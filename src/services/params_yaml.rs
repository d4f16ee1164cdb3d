use std::io;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::schedule::{OperatingHours, ProfileShape, ScheduleParams};

#[derive(Error, Debug)]
pub enum ParamsYamlError {
    #[error("failed to read params yaml file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse params yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid weekday value in {path}: {value}")]
    InvalidWeekday { path: PathBuf, value: String },
    #[error("invalid shape value in {path}: {value} (expected flat or triangular)")]
    InvalidShape { path: PathBuf, value: String },
}

#[derive(Debug, Deserialize)]
struct ScheduleParamsRecord {
    active_weekdays: Vec<String>,
    operating_start_hour: u32,
    operating_end_hour: u32,
    base_load_kw: f32,
    peak_load_kw: f32,
    noise_fraction: Option<f32>,
    shape: Option<String>,
}

/// Loads schedule params from a YAML file.
///
/// Only the file format is checked here; range constraints (hour window,
/// peak vs base, noise sign) are enforced by the generator.
pub fn load_schedule_params_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<ScheduleParams, ParamsYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ParamsYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_schedule_params_from_yaml_str(&contents, path)
}

fn deserialize_schedule_params_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<ScheduleParams, ParamsYamlError> {
    let record: ScheduleParamsRecord =
        serde_yaml::from_str(input).map_err(|source| ParamsYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;

    let active_weekdays = record
        .active_weekdays
        .into_iter()
        .map(|value| {
            parse_weekday(&value).ok_or_else(|| ParamsYamlError::InvalidWeekday {
                path: origin_path.to_path_buf(),
                value,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let shape = match record.shape {
        None => ProfileShape::default(),
        Some(value) => parse_shape(&value).ok_or_else(|| ParamsYamlError::InvalidShape {
            path: origin_path.to_path_buf(),
            value,
        })?,
    };

    Ok(ScheduleParams {
        active_weekdays,
        operating_hours: OperatingHours {
            start_hour: record.operating_start_hour,
            end_hour: record.operating_end_hour,
        },
        base_load_kw: record.base_load_kw,
        peak_load_kw: record.peak_load_kw,
        noise_fraction: record.noise_fraction.unwrap_or(0.0),
        shape,
    })
}

fn parse_weekday(value: &str) -> Option<Weekday> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

fn parse_shape(value: &str) -> Option<ProfileShape> {
    match value.trim().to_ascii_lowercase().as_str() {
        "flat" => Some(ProfileShape::Flat),
        "triangular" => Some(ProfileShape::Triangular),
        _ => None,
    }
}

/// Starter params file written by `init-params`.
pub fn starter_params_yaml() -> &'static str {
    "\
# Hourly load model parameters for one month.
active_weekdays: [monday, tuesday, wednesday, thursday, friday]
operating_start_hour: 8
operating_end_hour: 18
base_load_kw: 50.0
peak_load_kw: 150.0
# Standard deviation of the random variation, as a fraction of the
# instantaneous load. 0 disables variation.
noise_fraction: 0.05
# flat: constant peak load across the operating window.
# triangular: ramp up to the peak at the window midpoint, back down after.
shape: flat
"
}
