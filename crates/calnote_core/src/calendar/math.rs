//! Pure Gregorian and week-numbering arithmetic.
//!
//! # Responsibility
//! - Month lengths, leap years and year lengths.
//! - Locale-style week numbering parameterized by `WeekRule`.
//! - Year span offered by year pickers.
//!
//! # Invariants
//! - Week 1 of week year `Y` is the week containing January
//!   `min_days_in_first_week` of `Y`.
//! - `week_start_date` anchors at June 1st of the requested year so that
//!   dates near January 1st never leak into the adjacent week year.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::ops::RangeInclusive;

const WEEK_ANCHOR_MONTH: u32 = 6;
const WEEK_ANCHOR_DAY: u32 = 1;
const SELECTOR_YEARS_BEHIND: i32 = 5;
const SELECTOR_MIN_SPAN: i32 = 10;

/// Years the views navigate to; four-digit years only.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Week-numbering convention: first weekday plus how many days of the new
/// year week 1 must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekRule {
    pub first_weekday: Weekday,
    pub min_days_in_first_week: u32,
}

impl WeekRule {
    /// ISO-8601: weeks start on Monday, week 1 contains January 4th.
    pub const ISO: Self = Self {
        first_weekday: Weekday::Mon,
        min_days_in_first_week: 4,
    };

    /// US convention: weeks start on Sunday, week 1 contains January 1st.
    pub const US: Self = Self {
        first_weekday: Weekday::Sun,
        min_days_in_first_week: 1,
    };

    /// Builds a custom rule.
    ///
    /// # Panics
    /// - When `min_days_in_first_week` is outside `1..=7`.
    pub fn new(first_weekday: Weekday, min_days_in_first_week: u32) -> Self {
        assert!(
            (1..=7).contains(&min_days_in_first_week),
            "min_days_in_first_week must be within 1..=7, got {min_days_in_first_week}"
        );
        Self {
            first_weekday,
            min_days_in_first_week,
        }
    }

    /// Zero-based position of `weekday` inside a week of this rule.
    pub fn weekday_offset(self, weekday: Weekday) -> u32 {
        (7 + weekday.num_days_from_sunday() - self.first_weekday.num_days_from_sunday()) % 7
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`.
///
/// # Panics
/// - When `month` is outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    assert!((1..=12).contains(&month), "month out of range: {month}");
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, rule: WeekRule) -> NaiveDate {
    date - Duration::days(i64::from(rule.weekday_offset(date.weekday())))
}

/// Week year `date` belongs to. Differs from the calendar year for dates in
/// the first or last days of a year.
pub fn week_year(date: NaiveDate, rule: WeekRule) -> i32 {
    let year = date.year();
    if date >= first_week_start(year + 1, rule) {
        year + 1
    } else if date >= first_week_start(year, rule) {
        year
    } else {
        year - 1
    }
}

/// 1-based week number of `date` inside its week year.
pub fn week_number(date: NaiveDate, rule: WeekRule) -> u32 {
    let first = first_week_start(week_year(date, rule), rule);
    let weeks = (start_of_week(date, rule) - first).num_days() / 7;
    weeks as u32 + 1
}

/// Number of weeks in week year `year` (52 or 53).
pub fn weeks_in_year(year: i32, rule: WeekRule) -> u32 {
    let span = first_week_start(year + 1, rule) - first_week_start(year, rule);
    (span.num_days() / 7) as u32
}

/// First day of week `week` of week year `year`.
///
/// # Panics
/// - When `week` is outside `1..=weeks_in_year(year, rule)`.
pub fn week_start_date(year: i32, week: u32, rule: WeekRule) -> NaiveDate {
    let weeks = weeks_in_year(year, rule);
    assert!(
        (1..=weeks).contains(&week),
        "week {week} out of range for {year} (1..={weeks})"
    );

    let anchor = calendar_date(year, WEEK_ANCHOR_MONTH, WEEK_ANCHOR_DAY);
    let shift = i64::from(week) - i64::from(week_number(anchor, rule));
    start_of_week(anchor + Duration::weeks(shift), rule)
}

/// Inclusive year span offered by year pickers.
///
/// Always contains `start_year`, the current year and the five years before
/// it, and spans at least ten years.
pub fn year_selector_range(start_year: i32, today: NaiveDate) -> RangeInclusive<i32> {
    let this_year = today.year();
    let first = start_year.min(this_year - SELECTOR_YEARS_BEHIND);
    let last = (first + SELECTOR_MIN_SPAN).max(this_year).max(start_year);
    first..=last
}

/// Nearest year inside `SUPPORTED_YEARS`.
pub fn clamp_year(year: i32) -> i32 {
    year.clamp(*SUPPORTED_YEARS.start(), *SUPPORTED_YEARS.end())
}

fn first_week_start(week_year: i32, rule: WeekRule) -> NaiveDate {
    start_of_week(
        calendar_date(week_year, 1, rule.min_days_in_first_week),
        rule,
    )
}

fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("{year}-{month:02}-{day:02} is outside the supported calendar"))
}
