use crate::domain::month::MonthSpec;
use crate::domain::series::LoadSeries;

/// Summary of one generated month, printed after `generate`.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub year: i32,
    pub month: u32,
    pub hours: usize,
    pub operating_hours: usize,
    pub average_load_kw: f32,
    pub min_load_kw: f32,
    pub max_load_kw: f32,
    pub seed: Option<u64>,
}

pub fn build_generation_report(
    month: MonthSpec,
    series: &LoadSeries,
    seed: Option<u64>,
) -> GenerationReport {
    GenerationReport {
        year: month.year,
        month: month.month,
        hours: series.len(),
        operating_hours: series.operating_hour_count(),
        average_load_kw: series.average_load_kw(),
        min_load_kw: series.min_load_kw(),
        max_load_kw: series.max_load_kw(),
        seed,
    }
}
