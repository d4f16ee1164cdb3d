use chrono::Weekday;

/// Half-open daily window `[start_hour, end_hour)` within 0-24.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl OperatingHours {
    pub fn contains(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }
}

/// How the load behaves inside the operating window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileShape {
    /// Constant peak load across the whole operating window.
    #[default]
    Flat,
    /// Ramp from base load at window start up to peak load at the window
    /// midpoint, back down toward base load at window end.
    Triangular,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleParams {
    pub active_weekdays: Vec<Weekday>,
    pub operating_hours: OperatingHours,
    pub base_load_kw: f32,
    pub peak_load_kw: f32,
    pub noise_fraction: f32,
    pub shape: ProfileShape,
}

impl ScheduleParams {
    pub fn is_operating(&self, weekday: Weekday, hour: u32) -> bool {
        self.active_weekdays.contains(&weekday) && self.operating_hours.contains(hour)
    }

    /// Load level before noise for the given weekday and hour of day.
    pub fn target_load_kw(&self, weekday: Weekday, hour: u32) -> f32 {
        if !self.is_operating(weekday, hour) {
            return self.base_load_kw;
        }
        match self.shape {
            ProfileShape::Flat => self.peak_load_kw,
            ProfileShape::Triangular => self.ramp_load_kw(hour),
        }
    }

    // Requires start_hour < end_hour, so both half-window widths are >= 0.5.
    fn ramp_load_kw(&self, hour: u32) -> f32 {
        let start = self.operating_hours.start_hour as f32;
        let end = self.operating_hours.end_hour as f32;
        let midpoint = (start + end) / 2.0;
        let span = self.peak_load_kw - self.base_load_kw;
        let hour = hour as f32;
        if hour <= midpoint {
            self.base_load_kw + span * (hour - start) / (midpoint - start)
        } else {
            self.peak_load_kw - span * (hour - midpoint) / (end - midpoint)
        }
    }
}
