use std::io::{self, Write};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::series::{LoadPoint, LoadSeries};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Error, Debug)]
pub enum SeriesYamlError {
    #[error("failed to parse load series yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid timestamp in load series: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidTimestamp(String),
}

#[derive(Serialize, Deserialize)]
struct LoadPointRecord {
    timestamp: String,
    weekday: String,
    operating: bool,
    load_kw: f32,
}

pub fn serialize_series_to_yaml<W: Write>(writer: &mut W, series: &LoadSeries) -> io::Result<()> {
    let records: Vec<LoadPointRecord> = series
        .points()
        .iter()
        .map(|point| LoadPointRecord {
            timestamp: point.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            weekday: point.timestamp.format("%A").to_string(),
            operating: point.operating,
            load_kw: point.load_kw,
        })
        .collect();

    let yaml = serde_yaml::to_string(&records)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(yaml.as_bytes())
}

pub fn deserialize_series_from_yaml_str(input: &str) -> Result<LoadSeries, SeriesYamlError> {
    let records: Vec<LoadPointRecord> = serde_yaml::from_str(input)?;
    let points = records
        .into_iter()
        .map(|record| {
            let timestamp = NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT)
                .map_err(|_| SeriesYamlError::InvalidTimestamp(record.timestamp.clone()))?;
            Ok(LoadPoint {
                timestamp,
                load_kw: record.load_kw,
                operating: record.operating,
            })
        })
        .collect::<Result<Vec<_>, SeriesYamlError>>()?;
    Ok(LoadSeries::new(points))
}
