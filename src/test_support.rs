use chrono::{NaiveDate, NaiveDateTime, Weekday};

use crate::domain::schedule::{OperatingHours, ProfileShape, ScheduleParams};

pub fn on_hour(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Mon-Fri schedule over [8, 18) without noise, the default flat shape.
pub fn workweek_params(base_load_kw: f32, peak_load_kw: f32) -> ScheduleParams {
    ScheduleParams {
        active_weekdays: vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ],
        operating_hours: OperatingHours {
            start_hour: 8,
            end_hour: 18,
        },
        base_load_kw,
        peak_load_kw,
        noise_fraction: 0.0,
        shape: ProfileShape::Flat,
    }
}
