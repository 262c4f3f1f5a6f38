use chrono::{NaiveDate, Utc};

/// Source of "today" for default date ranges and relative date words.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock; the calendar date is taken in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date. Useful for tests and reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
