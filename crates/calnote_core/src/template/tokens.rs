//! Token sources feeding the resolver.

use crate::format::{DateFormatter, FormatResult};
use chrono::NaiveDate;

/// Token reserved for the navigated month, zero-padded.
pub const NAVIGATED_MONTH_TOKEN: &str = "MM";
/// Token reserved for the navigated day of month, zero-padded.
pub const NAVIGATED_DAY_TOKEN: &str = "DD";

/// Supplies the replacement text for one trimmed placeholder token.
pub trait TokenSource {
    fn token(&self, token: &str) -> FormatResult<String>;
}

/// Formats every token against a single date.
#[derive(Clone, Copy)]
pub struct DateTokens<'a> {
    formatter: &'a dyn DateFormatter,
    date: NaiveDate,
}

impl<'a> DateTokens<'a> {
    pub fn new(formatter: &'a dyn DateFormatter, date: NaiveDate) -> Self {
        Self { formatter, date }
    }
}

impl TokenSource for DateTokens<'_> {
    fn token(&self, token: &str) -> FormatResult<String> {
        self.formatter.format(self.date, token)
    }
}

/// Resolves `MM`/`DD` from a navigated month/day and formats every other
/// token against today, so one template serves both "today" and browsing.
#[derive(Clone, Copy)]
pub struct NavigatedTokens<'a> {
    formatter: &'a dyn DateFormatter,
    today: NaiveDate,
    month: u32,
    day: u32,
}

impl<'a> NavigatedTokens<'a> {
    pub fn new(formatter: &'a dyn DateFormatter, today: NaiveDate, month: u32, day: u32) -> Self {
        Self {
            formatter,
            today,
            month,
            day,
        }
    }
}

impl TokenSource for NavigatedTokens<'_> {
    fn token(&self, token: &str) -> FormatResult<String> {
        match token {
            NAVIGATED_MONTH_TOKEN => Ok(format!("{:02}", self.month)),
            NAVIGATED_DAY_TOKEN => Ok(format!("{:02}", self.day)),
            other => self.formatter.format(self.today, other),
        }
    }
}
