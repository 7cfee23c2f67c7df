//! Year view: every day of a year laid out in week rows.
//!
//! The year view reads no notes; each render is a pure function of the
//! selected year, today and the formatter's week rule.

use crate::model::ViewId;
use crate::view::context::ViewContext;
use crate::view::selector::Selector;
use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearEvent {
    SelectYear(i32),
    InspectDay { month: u32, day: u32 },
    ClearTooltip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthParity {
    Odd,
    Even,
}

impl MonthParity {
    pub fn of(month: u32) -> Self {
        if month % 2 == 1 {
            Self::Odd
        } else {
            Self::Even
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTitle {
    pub month: u32,
    /// Localized full month name.
    pub label: String,
    pub parity: MonthParity,
    /// Month lies before today's month.
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCell {
    pub date: NaiveDate,
    /// Two-digit day of month.
    pub label: String,
    /// Short description, e.g. `03-15 Week 11 Friday`.
    pub day_info: String,
    pub tooltip: String,
    pub is_today: bool,
    pub is_past: bool,
    pub is_month_start: bool,
    pub is_week_start: bool,
    pub month_parity: MonthParity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YearItem {
    MonthTitle(MonthTitle),
    Day(YearCell),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    /// `{week_year}Week{week}` of the row's first day.
    pub label: String,
    pub items: Vec<YearItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearModel {
    pub year: i32,
    pub year_selector: Selector,
    pub rows: Vec<WeekRow>,
    pub tooltip: Option<String>,
}

impl YearModel {
    /// Day cells in calendar order.
    pub fn cells(&self) -> impl Iterator<Item = &YearCell> {
        self.rows
            .iter()
            .flat_map(|row| row.items.iter())
            .filter_map(|item| match item {
                YearItem::Day(cell) => Some(cell),
                YearItem::MonthTitle(_) => None,
            })
    }

    pub fn month_titles(&self) -> impl Iterator<Item = &MonthTitle> {
        self.rows
            .iter()
            .flat_map(|row| row.items.iter())
            .filter_map(|item| match item {
                YearItem::MonthTitle(title) => Some(title),
                YearItem::Day(_) => None,
            })
    }
}

#[derive(Debug)]
pub struct YearView {
    id: ViewId,
    ctx: Arc<ViewContext>,
    year: i32,
    tooltip: Option<String>,
}

impl YearView {
    pub fn new(ctx: Arc<ViewContext>) -> Self {
        let year = ctx.today().year();
        let id = Uuid::new_v4();
        info!(
            "event=view_mount module=view status=ok view=year view_id={} year={}",
            id, year
        );
        Self {
            id,
            ctx,
            year,
            tooltip: None,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Moves to `year`, clamped to the supported four-digit years.
    pub fn select_year(&mut self, year: i32) {
        self.year = crate::calendar::clamp_year(year);
        self.tooltip = None;
    }

    /// Shows the tooltip text of `month`/`day` in the selected year.
    ///
    /// # Panics
    /// Panics when the date does not exist in the selected year.
    pub fn inspect_day(&mut self, month: u32, day: u32) {
        let date = NaiveDate::from_ymd_opt(self.year, month, day).unwrap_or_else(|| {
            panic!("{}-{month:02}-{day:02} is not a calendar date", self.year)
        });
        self.tooltip = Some(self.tooltip_for(date));
    }

    pub fn clear_tooltip(&mut self) {
        self.tooltip = None;
    }

    pub fn apply(&mut self, event: YearEvent) {
        debug!(
            "event=view_event module=view status=start view=year view_id={} event={:?}",
            self.id, event
        );
        match event {
            YearEvent::SelectYear(year) => self.select_year(year),
            YearEvent::InspectDay { month, day } => self.inspect_day(month, day),
            YearEvent::ClearTooltip => self.clear_tooltip(),
        }
    }

    pub fn model(&self) -> YearModel {
        let ctx = self.ctx.as_ref();
        let formatter = ctx.formatter();
        let rule = formatter.week_rule();
        let today = ctx.today();
        let locale = ctx.settings().locale;

        let start_year = ctx.settings().start_date(formatter, today).year();
        let range = crate::calendar::year_selector_range(start_year, today);
        let first = (*range.start()).min(self.year);
        let last = (*range.end()).max(self.year);
        let year_selector =
            Selector::from_values(first..=last, self.year, |year| year.to_string());

        let mut rows: Vec<WeekRow> = Vec::new();
        for month in 1..=12 {
            let parity = MonthParity::of(month);
            for day in 1..=formatter.days_in_month(self.year, month) {
                let Some(date) = NaiveDate::from_ymd_opt(self.year, month, day) else {
                    continue;
                };
                let is_week_start = date.weekday() == rule.first_weekday;
                if is_week_start || rows.is_empty() {
                    rows.push(WeekRow {
                        label: format!(
                            "{}Week{}",
                            formatter.week_year(date),
                            formatter.week_number(date)
                        ),
                        items: Vec::new(),
                    });
                }
                let Some(row) = rows.last_mut() else {
                    continue;
                };

                if day == 1 {
                    row.items.push(YearItem::MonthTitle(MonthTitle {
                        month,
                        label: locale.month_name(month).to_string(),
                        parity,
                        passed: (self.year, month) < (today.year(), today.month()),
                    }));
                }
                row.items.push(YearItem::Day(YearCell {
                    date,
                    label: format!("{day:02}"),
                    day_info: ctx.format_or_pattern(date, locale.day_info_pattern()),
                    tooltip: self.tooltip_for(date),
                    is_today: date == today,
                    is_past: date < today,
                    is_month_start: day == 1,
                    is_week_start,
                    month_parity: parity,
                }));
            }
        }

        YearModel {
            year: self.year,
            year_selector,
            rows,
            tooltip: self.tooltip.clone(),
        }
    }

    fn tooltip_for(&self, date: NaiveDate) -> String {
        let locale = self.ctx.settings().locale;
        self.ctx.format_or_pattern(date, locale.tooltip_pattern())
    }
}
