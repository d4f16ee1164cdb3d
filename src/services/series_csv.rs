//! CSV export for generated load series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::{Datelike, Timelike};
use thiserror::Error;

use crate::domain::series::LoadSeries;
use crate::services::series_yaml::{
    deserialize_series_from_yaml_str, SeriesYamlError, TIMESTAMP_FORMAT,
};

const HEADER: &str = "timestamp,year,month,day,hour,weekday,operating,load_kw";

#[derive(Error, Debug)]
pub enum SeriesCsvError {
    #[error("failed to export load series csv: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse load series yaml: {0}")]
    ParseSeries(#[from] SeriesYamlError),
    #[error("load series is empty")]
    EmptySeries,
}

pub fn export_series_csv_from_yaml_file(
    input_path: &str,
    output_path: &str,
) -> Result<(), SeriesCsvError> {
    let series_yaml = std::fs::read_to_string(input_path)?;
    let series = deserialize_series_from_yaml_str(&series_yaml)?;
    if series.is_empty() {
        return Err(SeriesCsvError::EmptySeries);
    }
    export_series_csv(&series, Path::new(output_path))?;
    Ok(())
}

pub fn export_series_csv(series: &LoadSeries, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_series_csv(series, buf)
}

/// Writes the series as CSV to any writer. One row per hour, deterministic
/// output for identical input.
pub fn write_series_csv(series: &LoadSeries, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for point in series.points() {
        let timestamp = point.timestamp;
        wtr.write_record(&[
            timestamp.format(TIMESTAMP_FORMAT).to_string(),
            timestamp.year().to_string(),
            timestamp.month().to_string(),
            timestamp.day().to_string(),
            timestamp.hour().to_string(),
            timestamp.format("%A").to_string(),
            point.operating.to_string(),
            format!("{:.3}", point.load_kw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::LoadPoint;
    use crate::test_support::on_hour;

    fn make_point(hour: u32) -> LoadPoint {
        LoadPoint {
            timestamp: on_hour(2024, 3, 4, hour),
            load_kw: if (8..18).contains(&hour) { 100.0 } else { 10.0 },
            operating: (8..18).contains(&hour),
        }
    }

    #[test]
    fn header_names_every_column() {
        let series = LoadSeries::new(vec![make_point(0)]);
        let mut buf = Vec::new();
        write_series_csv(&series, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let first_line = output.lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "timestamp,year,month,day,hour,weekday,operating,load_kw"
        );
    }

    #[test]
    fn row_count_matches_point_count() {
        let series = LoadSeries::new((0..24).map(make_point).collect());
        let mut buf = Vec::new();
        write_series_csv(&series, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        // 1 header + 24 data rows
        assert_eq!(output.lines().count(), 25);
    }

    #[test]
    fn deterministic_output() {
        let series = LoadSeries::new((0..5).map(make_point).collect());
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_series_csv(&series, &mut buf1).unwrap();
        write_series_csv(&series, &mut buf2).unwrap();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let series = LoadSeries::new((6..10).map(make_point).collect());
        let mut buf = Vec::new();
        write_series_csv(&series, &mut buf).unwrap();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().unwrap();
        assert_eq!(headers.len(), 8);

        let mut row_count = 0;
        for record in rdr.records() {
            let record = record.unwrap();
            // Numeric columns parse back.
            for index in 1..5 {
                let value: Result<u32, _> = record[index].parse();
                assert!(value.is_ok(), "column {index} should parse as u32");
            }
            let operating: Result<bool, _> = record[6].parse();
            assert!(operating.is_ok(), "operating column should parse as bool");
            let load: Result<f32, _> = record[7].parse();
            assert!(load.is_ok(), "load_kw column should parse as f32");
            row_count += 1;
        }
        assert_eq!(row_count, 4);
    }
}
