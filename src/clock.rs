//! Wall-clock access for the "current year" default.

use chrono::{Datelike, Local, NaiveDate};

/// Clock abstracts access to the current date so formatting stays deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;

    /// Returns the current calendar year. Defaults to `today().year()`.
    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// Real-time clock backed by the local system date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
    year: i32,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            year: date.year(),
        }
    }

    /// A clock frozen on January 1st of `year`.
    ///
    /// `year()` always reports `year`. For years outside chrono's range,
    /// `today()` is clamped to the minimum or maximum representable date.
    pub fn in_year(year: i32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(if year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        });
        Self { date, year }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn year(&self) -> i32 {
        self.year
    }
}
