//! Shared, read-only collaborators of every mounted view.

use crate::calendar::{Clock, SystemClock};
use crate::format::{DateFormatter, MomentFormatter, Placeholders};
use crate::settings::Settings;
use crate::template::{DateTokens, Template, TokenSource};
use chrono::NaiveDate;
use log::error;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Settings, formatter and clock shared by the views of one host.
#[derive(Clone)]
pub struct ViewContext {
    settings: Settings,
    formatter: Arc<dyn DateFormatter>,
    clock: Arc<dyn Clock>,
}

impl Debug for ViewContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewContext")
            .field("settings", &self.settings)
            .field("week_rule", &self.formatter.week_rule())
            .field("today", &self.clock.today())
            .finish()
    }
}

impl ViewContext {
    /// Context with a `MomentFormatter` for the settings' locale and the
    /// system clock.
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    pub fn with_clock(settings: Settings, clock: Arc<dyn Clock>) -> Self {
        let formatter = Arc::new(MomentFormatter::new(settings.locale));
        Self::with_parts(settings, formatter, clock)
    }

    pub fn with_parts(
        settings: Settings,
        formatter: Arc<dyn DateFormatter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            formatter,
            clock,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn formatter(&self) -> &dyn DateFormatter {
        self.formatter.as_ref()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn placeholders(&self) -> Placeholders {
        self.settings.locale.placeholders()
    }

    /// Resolves `template` with every token formatted against `date`.
    pub fn resolve_for(&self, template: &Template, date: NaiveDate) -> String {
        self.resolve_with(template, &DateTokens::new(self.formatter(), date))
    }

    pub fn resolve_with(&self, template: &Template, source: &impl TokenSource) -> String {
        template.resolve(source).into_string()
    }

    /// Formats `date`; on failure logs and returns the raw pattern.
    pub(crate) fn format_or_pattern(&self, date: NaiveDate, pattern: &str) -> String {
        match self.formatter.format(date, pattern) {
            Ok(text) => text,
            Err(err) => {
                error!(
                    "event=date_format module=view status=error pattern={:?} error={}",
                    pattern, err
                );
                pattern.to_string()
            }
        }
    }
}
