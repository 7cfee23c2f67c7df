//! Navigation coordinates owned by the calendar views.
//!
//! # Responsibility
//! - Represent the day or week a view is navigated to.
//! - Keep coordinates valid across month/year changes by clamping.
//!
//! # Invariants
//! - `DayCoordinate::day` never exceeds the day count of its month.
//! - `WeekCoordinate::week` is within `1..=weeks_in_year(year)` for the rule
//!   it was built with.

use crate::calendar::{self, WeekRule};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

/// Random identifier of a mounted view, used to correlate log events.
pub type ViewId = Uuid;

/// `{year, month, day}` with 1-based month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DayCoordinate {
    year: i32,
    month: u32,
    day: u32,
}

impl DayCoordinate {
    /// # Panics
    /// Panics when the triple does not name a calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let days = calendar::days_in_month(year, month);
        assert!(
            (1..=days).contains(&day),
            "day {day} out of range for {year}-{month:02} (1..={days})"
        );
        Self { year, month, day }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .unwrap_or_else(|| unreachable!("coordinate is validated on construction"))
    }

    /// Moves to `month`, clamping the day to that month's length.
    pub fn with_month(self, month: u32) -> Self {
        let day = self.day.min(calendar::days_in_month(self.year, month));
        Self { month, day, ..self }
    }

    /// # Panics
    /// Panics when `day` is outside the current month.
    pub fn with_day(self, day: u32) -> Self {
        Self::new(self.year, self.month, day)
    }
}

/// `{year, week}` in week-year numbering of a `WeekRule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WeekCoordinate {
    year: i32,
    week: u32,
}

impl WeekCoordinate {
    /// # Panics
    /// Panics when `week` is outside `1..=weeks_in_year(year, rule)`.
    pub fn new(year: i32, week: u32, rule: WeekRule) -> Self {
        let weeks = calendar::weeks_in_year(year, rule);
        assert!(
            (1..=weeks).contains(&week),
            "week {week} out of range for {year} (1..={weeks})"
        );
        Self { year, week }
    }

    /// Week containing `date`, expressed in its week year.
    pub fn from_date(date: NaiveDate, rule: WeekRule) -> Self {
        Self {
            year: calendar::week_year(date, rule),
            week: calendar::week_number(date, rule),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    /// Moves to `year`, clamping the week to that year's week count.
    pub fn with_year(self, year: i32, rule: WeekRule) -> Self {
        let week = self.week.min(calendar::weeks_in_year(year, rule));
        Self { year, week }
    }

    pub fn with_week(self, week: u32, rule: WeekRule) -> Self {
        Self::new(self.year, week, rule)
    }

    pub fn start_date(&self, rule: WeekRule) -> NaiveDate {
        calendar::week_start_date(self.year, self.week, rule)
    }
}
