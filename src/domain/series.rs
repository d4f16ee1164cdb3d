use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadPoint {
    pub timestamp: NaiveDateTime,
    pub load_kw: f32,
    pub operating: bool,
}

/// Hourly load values for one month, in chronological order.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSeries {
    points: Vec<LoadPoint>,
}

impl LoadSeries {
    pub fn new(points: Vec<LoadPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[LoadPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn operating_hour_count(&self) -> usize {
        self.points.iter().filter(|point| point.operating).count()
    }

    pub fn average_load_kw(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        let total: f32 = self.points.iter().map(|point| point.load_kw).sum();
        total / self.points.len() as f32
    }

    pub fn min_load_kw(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|point| point.load_kw)
            .fold(f32::INFINITY, f32::min)
    }

    pub fn max_load_kw(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|point| point.load_kw)
            .fold(f32::NEG_INFINITY, f32::max)
    }
}
