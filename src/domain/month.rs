use chrono::NaiveDate;
use chrono::NaiveDateTime;

/// One calendar month, the unit a load series is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpec {
    pub year: i32,
    pub month: u32,
}

impl MonthSpec {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// First calendar day of the month, or `None` when year/month do not
    /// form a valid date.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    fn first_day_of_next_month(&self) -> Option<NaiveDate> {
        if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
    }

    pub fn day_count(&self) -> Option<i64> {
        let first = self.first_day()?;
        let next = self.first_day_of_next_month()?;
        Some(next.signed_duration_since(first).num_days())
    }

    pub fn hour_count(&self) -> Option<i64> {
        Some(self.day_count()? * 24)
    }

    /// All hourly timestamps of the month in chronological order, from
    /// midnight of day 1 through 23:00 of the last day.
    pub fn hours(&self) -> Option<impl Iterator<Item = NaiveDateTime>> {
        let first = self.first_day()?;
        let next = self.first_day_of_next_month()?;
        Some(
            first
                .iter_days()
                .take_while(move |date| *date < next)
                .flat_map(|date| (0..24).map(move |hour| date.and_hms_opt(hour, 0, 0).unwrap())),
        )
    }
}
