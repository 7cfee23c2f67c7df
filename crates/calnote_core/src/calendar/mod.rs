//! Calendar arithmetic and the injected notion of "today".
//!
//! # Responsibility
//! - Provide Gregorian month/day tables and leap-year rules.
//! - Compute week-of-year, week year and week start dates for a `WeekRule`.
//! - Supply the current date through an injectable `Clock`.
//!
//! # Invariants
//! - Months and days are 1-based.
//! - Every function is total over valid inputs; invalid month/week indices
//!   are programmer errors and panic.

pub mod clock;
pub mod math;

pub use clock::{Clock, FixedClock, SystemClock};
pub use math::{
    clamp_year, days_in_month, days_in_year, is_leap_year, start_of_week, week_number, week_start_date,
    week_year, weeks_in_year, year_selector_range, WeekRule, SUPPORTED_YEARS,
};
