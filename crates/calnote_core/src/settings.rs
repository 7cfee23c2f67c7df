//! Read-only host configuration.
//!
//! # Responsibility
//! - Hold the templates and display options the views read.
//! - Load camelCase JSON as persisted by the host, merging missing keys with
//!   defaults.
//!
//! # Invariants
//! - Views never mutate settings; they share one `Settings` through the
//!   view context.
//! - An unparseable `dailyStartDate` falls back to today at read time.

use crate::format::{DateFormatter, Locale};
use crate::template::Template;
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::ops::RangeInclusive;
use std::path::Path;

pub const DEFAULT_DAILY_NOTE_PATH: &str = "Daily/${{MM}}/${{MM}}-${{DD}}.md";
pub const DEFAULT_DAILY_NOTE_TITLE: &str = "${{YYYY}}-${{MM}}-${{DD}} ${{dddd}}";
pub const DEFAULT_WEEK_NOTE_PATH: &str = "Week/${{YYYY}}/Week${{ww}}.md";
pub const DEFAULT_DAILY_CONTENT_LINE_COUNT: u32 = 5;
pub const DAILY_CONTENT_LINE_COUNT_RANGE: RangeInclusive<u32> = 1..=20;
/// Pattern of `dailyStartDate`.
pub const START_DATE_PATTERN: &str = "YYYY-MM-DD";

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    InvalidLineCount(u32),
    InvalidStartDate(String),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read settings `{path}`: {source}"),
            Self::Json(err) => write!(f, "invalid settings json: {err}"),
            Self::InvalidLineCount(count) => write!(
                f,
                "dailyContentLineCount must be within {}..={}, got {count}",
                DAILY_CONTENT_LINE_COUNT_RANGE.start(),
                DAILY_CONTENT_LINE_COUNT_RANGE.end()
            ),
            Self::InvalidStartDate(value) => {
                write!(f, "dailyStartDate `{value}` is not a {START_DATE_PATTERN} date")
            }
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::InvalidLineCount(_) | Self::InvalidStartDate(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Daily note path; `MM`/`DD` follow the navigated date.
    pub daily_note_path: Template,
    /// Heading that marks a day's section inside its daily note.
    pub daily_note_title: Template,
    /// Weekly note path, resolved from the week's start date.
    pub week_note_path: Template,
    /// Lines shown per block while folded.
    pub daily_content_line_count: u32,
    /// First day the user kept notes, `YYYY-MM-DD`. `None` means today.
    pub daily_start_date: Option<String>,
    pub locale: Locale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_note_path: Template::new(DEFAULT_DAILY_NOTE_PATH),
            daily_note_title: Template::new(DEFAULT_DAILY_NOTE_TITLE),
            week_note_path: Template::new(DEFAULT_WEEK_NOTE_PATH),
            daily_content_line_count: DEFAULT_DAILY_CONTENT_LINE_COUNT,
            daily_start_date: None,
            locale: Locale::default(),
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads settings from a JSON file. A missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_str(&json),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "event=settings_load module=settings status=missing path={}",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Checks value ranges the views rely on.
    ///
    /// # Errors
    /// - `InvalidLineCount` when the fold depth is outside `1..=20`.
    /// - `InvalidStartDate` when `dailyStartDate` is set but unparseable.
    pub fn validate(&self, formatter: &dyn DateFormatter) -> SettingsResult<()> {
        if !DAILY_CONTENT_LINE_COUNT_RANGE.contains(&self.daily_content_line_count) {
            return Err(SettingsError::InvalidLineCount(
                self.daily_content_line_count,
            ));
        }
        if let Some(value) = self.configured_start_date() {
            formatter
                .parse(value, START_DATE_PATTERN)
                .map_err(|_| SettingsError::InvalidStartDate(value.to_string()))?;
        }
        Ok(())
    }

    /// Effective `dailyStartDate`, falling back to `today`.
    pub fn start_date(&self, formatter: &dyn DateFormatter, today: NaiveDate) -> NaiveDate {
        let Some(value) = self.configured_start_date() else {
            return today;
        };
        match formatter.parse(value, START_DATE_PATTERN) {
            Ok(date) => date,
            Err(err) => {
                warn!(
                    "event=settings_start_date module=settings status=fallback value={} error={}",
                    value, err
                );
                today
            }
        }
    }

    /// Fold depth, clamped into the supported range.
    pub fn fold_lines(&self) -> u32 {
        self.daily_content_line_count.clamp(
            *DAILY_CONTENT_LINE_COUNT_RANGE.start(),
            *DAILY_CONTENT_LINE_COUNT_RANGE.end(),
        )
    }

    fn configured_start_date(&self) -> Option<&str> {
        self.daily_start_date
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}
