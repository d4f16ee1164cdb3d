use plotters::prelude::*;
use thiserror::Error;

use crate::domain::series::LoadSeries;
use crate::services::series_yaml::{deserialize_series_from_yaml_str, SeriesYamlError};

#[derive(Error, Debug)]
pub enum LoadChartError {
    #[error("failed to read load series file: {0}")]
    ReadSeries(#[from] std::io::Error),
    #[error("failed to parse load series yaml: {0}")]
    ParseSeries(#[from] SeriesYamlError),
    #[error("load series is empty")]
    EmptySeries,
    #[error("failed to render load chart: {0}")]
    Render(String),
}

pub fn plot_series_from_yaml_file(
    input_path: &str,
    output_path: &str,
) -> Result<(), LoadChartError> {
    let series_yaml = std::fs::read_to_string(input_path)?;
    let series = deserialize_series_from_yaml_str(&series_yaml)?;
    write_series_chart_png(output_path, &series)
}

pub fn write_series_chart_png(
    output_path: &str,
    series: &LoadSeries,
) -> Result<(), LoadChartError> {
    if series.is_empty() {
        return Err(LoadChartError::EmptySeries);
    }
    render_series_png(output_path, series)
}

fn render_series_png(output_path: &str, series: &LoadSeries) -> Result<(), LoadChartError> {
    let max_y = (series.max_load_kw() * 1.1).max(1.0);
    let max_x = series.len() as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| LoadChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Hourly Load", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0f32..max_y)
        .map_err(|e| LoadChartError::Render(e.to_string()))?;

    let points = series.points();
    let label_count = points.len().min(10).max(1);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Date")
        .y_desc("Load (kW)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            points
                .get(*index as usize)
                .map(|point| point.timestamp.format("%m-%d").to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| LoadChartError::Render(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .enumerate()
                .map(|(index, point)| (index as i32, point.load_kw)),
            &line_color,
        ))
        .map_err(|e| LoadChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| LoadChartError::Render(e.to_string()))?;
    Ok(())
}
