use chrono::{Datelike, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use thiserror::Error;

use crate::domain::month::MonthSpec;
use crate::domain::schedule::ScheduleParams;
use crate::domain::series::{LoadPoint, LoadSeries};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Builds the hourly load series for one month.
///
/// With a seed the result is fully reproducible; without one the noise is
/// drawn from the thread RNG. A `noise_fraction` of zero emits the target
/// loads exactly and never touches the RNG.
pub fn generate_load_series(
    month: MonthSpec,
    params: &ScheduleParams,
    seed: Option<u64>,
) -> Result<LoadSeries, GenerateError> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_load_series_with_rng(month, params, &mut rng)
        }
        None => {
            let mut rng = rand::thread_rng();
            generate_load_series_with_rng(month, params, &mut rng)
        }
    }
}

pub fn generate_load_series_with_rng<R: Rng + ?Sized>(
    month: MonthSpec,
    params: &ScheduleParams,
    rng: &mut R,
) -> Result<LoadSeries, GenerateError> {
    validate(month, params)?;

    // The perturbation is a zero-mean normal factor of the instantaneous
    // load, clamped so the series never goes negative.
    let noise = if params.noise_fraction > 0.0 {
        let normal = Normal::new(0.0f32, params.noise_fraction).map_err(|_| {
            GenerateError::InvalidParameter(format!(
                "noise fraction {} is not usable as a standard deviation",
                params.noise_fraction
            ))
        })?;
        Some(normal)
    } else {
        None
    };

    let hours = month.hours().ok_or_else(|| invalid_month(month))?;
    let mut points = Vec::with_capacity(month.hour_count().unwrap_or(0) as usize);
    for timestamp in hours {
        let weekday = timestamp.weekday();
        let hour = timestamp.hour();
        let target = params.target_load_kw(weekday, hour);
        let load_kw = match &noise {
            Some(normal) => {
                let factor = normal.sample(rng);
                (target * (1.0 + factor)).max(0.0)
            }
            None => target,
        };
        points.push(LoadPoint {
            timestamp,
            load_kw: round_kw(load_kw),
            operating: params.is_operating(weekday, hour),
        });
    }

    Ok(LoadSeries::new(points))
}

fn validate(month: MonthSpec, params: &ScheduleParams) -> Result<(), GenerateError> {
    if month.first_day().is_none() {
        return Err(invalid_month(month));
    }

    let hours = params.operating_hours;
    if hours.end_hour > 24 {
        return Err(GenerateError::InvalidParameter(format!(
            "operating end hour {} is outside 0-24",
            hours.end_hour
        )));
    }
    if hours.start_hour >= hours.end_hour {
        return Err(GenerateError::InvalidParameter(format!(
            "operating start hour {} must be before end hour {}",
            hours.start_hour, hours.end_hour
        )));
    }

    if params.active_weekdays.is_empty() {
        return Err(GenerateError::InvalidParameter(
            "active weekdays must not be empty".to_string(),
        ));
    }

    if !params.base_load_kw.is_finite() || params.base_load_kw < 0.0 {
        return Err(GenerateError::InvalidParameter(format!(
            "base load {} kW must be a non-negative number",
            params.base_load_kw
        )));
    }
    if !params.peak_load_kw.is_finite() || params.peak_load_kw < params.base_load_kw {
        return Err(GenerateError::InvalidParameter(format!(
            "peak load {} kW must not be below base load {} kW",
            params.peak_load_kw, params.base_load_kw
        )));
    }
    if !params.noise_fraction.is_finite() || params.noise_fraction < 0.0 {
        return Err(GenerateError::InvalidParameter(format!(
            "noise fraction {} must be a non-negative number",
            params.noise_fraction
        )));
    }

    Ok(())
}

fn invalid_month(month: MonthSpec) -> GenerateError {
    GenerateError::InvalidParameter(format!(
        "{}-{:02} is not a valid month",
        month.year, month.month
    ))
}

fn round_kw(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
