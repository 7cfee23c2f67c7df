//! Injected date-formatting capability.
//!
//! # Responsibility
//! - Define the `DateFormatter` contract used by templates and views.
//! - Keep week-numbering queries consistent with token formatting by routing
//!   both through one `WeekRule`.
//!
//! # Invariants
//! - `format` and `parse` never panic; failures surface as `FormatError`.
//! - Week queries on a formatter always agree with its `w`/`ww`/`gggg`
//!   tokens.

pub mod locale;
pub mod moment;

use crate::calendar::{self, WeekRule};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use locale::{Locale, Placeholders};
pub use moment::MomentFormatter;

pub type FormatResult<T> = Result<T, FormatError>;

/// Formatting/parsing failure reported by a `DateFormatter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A `[` literal escape is never closed.
    UnterminatedLiteral { pattern: String },
    /// Pattern token has no parse support.
    UnsupportedParseToken { pattern: String, token: String },
    /// Input text does not match the pattern or names an impossible date.
    Unparseable { input: String, pattern: String },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedLiteral { pattern } => {
                write!(f, "unterminated `[` literal in pattern `{pattern}`")
            }
            Self::UnsupportedParseToken { pattern, token } => {
                write!(f, "token `{token}` in pattern `{pattern}` cannot be parsed")
            }
            Self::Unparseable { input, pattern } => {
                write!(f, "`{input}` does not match date pattern `{pattern}`")
            }
        }
    }
}

impl Error for FormatError {}

/// Date formatting and week arithmetic supplied by the host.
pub trait DateFormatter: Send + Sync {
    /// Formats `date` with a moment-style display pattern.
    fn format(&self, date: NaiveDate, pattern: &str) -> FormatResult<String>;

    /// Parses `input` with a moment-style pattern.
    fn parse(&self, input: &str, pattern: &str) -> FormatResult<NaiveDate>;

    /// Week convention shared by formatting and week queries.
    fn week_rule(&self) -> WeekRule;

    fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        calendar::start_of_week(date, self.week_rule())
    }

    fn week_number(&self, date: NaiveDate) -> u32 {
        calendar::week_number(date, self.week_rule())
    }

    fn week_year(&self, date: NaiveDate) -> i32 {
        calendar::week_year(date, self.week_rule())
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        calendar::days_in_month(year, month)
    }

    fn weeks_in_year(&self, year: i32) -> u32 {
        calendar::weeks_in_year(year, self.week_rule())
    }

    fn week_start_date(&self, year: i32, week: u32) -> NaiveDate {
        calendar::week_start_date(year, week, self.week_rule())
    }
}
