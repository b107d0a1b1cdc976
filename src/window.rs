use chrono::{Days, NaiveDate, TimeZone, Utc};

pub const PAST_DAYS: u64 = 15;
pub const FUTURE_DAYS: u64 = 30;

/// Inclusive `[from, to]` range of dates requested from the IPO calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn around(today: NaiveDate) -> Self {
        Self {
            from: today - Days::new(PAST_DAYS),
            to: today + Days::new(FUTURE_DAYS),
        }
    }

    /// Window around the current date as seen from `timezone`.
    pub fn current<Tz: TimeZone>(timezone: &Tz) -> Self {
        Self::around(Utc::now().with_timezone(timezone).date_naive())
    }

    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("from", self.from.format("%Y-%m-%d").to_string()),
            ("to", self.to.format("%Y-%m-%d").to_string()),
        ]
    }
}
