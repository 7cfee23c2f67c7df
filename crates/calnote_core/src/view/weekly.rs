//! Weekly view: seven daily sections plus the weekly summary note.
//!
//! # Responsibility
//! - Navigate `{year, week}` in the formatter's week numbering.
//! - Pull each day's titled section out of its daily note.
//! - Show the weekly note body alongside, or instead of, the days.
//!
//! # Invariants
//! - The week start is always computed from the June 1st anchor.
//! - The seven day fetches run concurrently; each fills its own slot.
//! - Fold and mode toggles never re-fetch.

use crate::markdown::{extract_blocks, find_block_by_heading};
use crate::model::{ViewId, WeekCoordinate};
use crate::store::NoteStore;
use crate::view::context::ViewContext;
use crate::view::selector::Selector;
use crate::view::{fetch_text, log_stale};
use chrono::{Datelike, Duration, NaiveDate};
use futures::future::join_all;
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

const DAYS_PER_WEEK: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeeklyEvent {
    SelectYear(i32),
    SelectWeek(u32),
    GotoToday,
    ToggleFold,
    /// Switches between the day sections and the weekly note.
    ToggleMode,
}

#[derive(Debug)]
pub enum WeeklyTransition {
    Fetch(WeeklyRequest),
    Rerender,
}

#[derive(Debug, Clone)]
pub struct WeeklyRequest {
    view_id: ViewId,
    coordinate: WeekCoordinate,
    ctx: Arc<ViewContext>,
}

impl WeeklyRequest {
    pub fn coordinate(&self) -> WeekCoordinate {
        self.coordinate
    }

    /// Fetches the seven daily notes and the weekly note concurrently.
    pub async fn load(self, store: &dyn NoteStore) -> WeeklyLoad {
        let ctx = self.ctx.as_ref();
        let settings = ctx.settings();
        let week_start = self.coordinate.start_date(ctx.formatter().week_rule());
        let weekly_path = ctx.resolve_for(&settings.week_note_path, week_start);

        let days = (0..DAYS_PER_WEEK).map(|offset| {
            let date = week_start + Duration::days(offset);
            load_day(ctx, store, date, self.view_id)
        });
        let (days, summary) = futures::join!(
            join_all(days),
            fetch_text(store, &weekly_path, self.view_id)
        );

        debug!(
            "event=weekly_load module=view status=ok view_id={} week_start={} weekly_path={} recorded_days={}",
            self.view_id,
            week_start,
            weekly_path,
            days.iter().filter(|day| day.body.is_some()).count()
        );
        WeeklyLoad {
            coordinate: self.coordinate,
            week_start,
            weekly_path,
            days,
            summary: (!summary.is_empty()).then_some(summary),
        }
    }
}

#[derive(Debug, Clone)]
struct DayLoad {
    date: NaiveDate,
    title: String,
    path: String,
    body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WeeklyLoad {
    coordinate: WeekCoordinate,
    week_start: NaiveDate,
    weekly_path: String,
    days: Vec<DayLoad>,
    summary: Option<String>,
}

impl WeeklyLoad {
    pub fn coordinate(&self) -> WeekCoordinate {
        self.coordinate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySection {
    pub date: NaiveDate,
    /// Resolved daily title, also the heading searched for.
    pub title: String,
    /// Daily note path the title links to.
    pub path: String,
    /// Section body, or the "no record" placeholder.
    pub body: String,
    pub recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    /// `{year}Week{ww}`.
    pub title: String,
    pub path: String,
    /// Weekly note text, or the "no summary" placeholder.
    pub body: String,
    pub recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyModel {
    pub coordinate: WeekCoordinate,
    pub week_start: NaiveDate,
    pub weekly_path: String,
    pub year_selector: Selector,
    pub week_selector: Selector,
    /// Empty while `loading`.
    pub days: Vec<DaySection>,
    pub summary: Option<WeeklySummary>,
    pub clamp_lines: Option<u32>,
    pub weekly_mode: bool,
    pub loading: bool,
}

#[derive(Debug)]
pub struct WeeklyView {
    id: ViewId,
    ctx: Arc<ViewContext>,
    coordinate: WeekCoordinate,
    folded: bool,
    weekly_mode: bool,
    loaded: Option<WeeklyLoad>,
}

impl WeeklyView {
    /// Mounts on today's week, folded, in daily mode.
    pub fn new(ctx: Arc<ViewContext>) -> Self {
        let coordinate = current_week(&ctx);
        let id = Uuid::new_v4();
        info!(
            "event=view_mount module=view status=ok view=weekly view_id={} coordinate={:?}",
            id, coordinate
        );
        Self {
            id,
            ctx,
            coordinate,
            folded: true,
            weekly_mode: false,
            loaded: None,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn coordinate(&self) -> WeekCoordinate {
        self.coordinate
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn is_weekly_mode(&self) -> bool {
        self.weekly_mode
    }

    pub fn request(&self) -> WeeklyRequest {
        WeeklyRequest {
            view_id: self.id,
            coordinate: self.coordinate,
            ctx: Arc::clone(&self.ctx),
        }
    }

    /// Moves to `year` (clamped to the supported four-digit years), keeping
    /// the week number when that year has it.
    pub fn select_year(&mut self, year: i32) -> WeeklyRequest {
        let rule = self.ctx.formatter().week_rule();
        let year = crate::calendar::clamp_year(year);
        self.coordinate = self.coordinate.with_year(year, rule);
        self.request()
    }

    /// # Panics
    /// Panics when `week` is outside the selected year's weeks.
    pub fn select_week(&mut self, week: u32) -> WeeklyRequest {
        let rule = self.ctx.formatter().week_rule();
        self.coordinate = self.coordinate.with_week(week, rule);
        self.request()
    }

    pub fn goto_today(&mut self) -> WeeklyRequest {
        self.coordinate = current_week(&self.ctx);
        self.request()
    }

    pub fn toggle_fold(&mut self) {
        self.folded = !self.folded;
    }

    pub fn toggle_mode(&mut self) {
        self.weekly_mode = !self.weekly_mode;
    }

    pub fn apply(&mut self, event: WeeklyEvent) -> WeeklyTransition {
        debug!(
            "event=view_event module=view status=start view=weekly view_id={} event={:?}",
            self.id, event
        );
        match event {
            WeeklyEvent::SelectYear(year) => WeeklyTransition::Fetch(self.select_year(year)),
            WeeklyEvent::SelectWeek(week) => WeeklyTransition::Fetch(self.select_week(week)),
            WeeklyEvent::GotoToday => WeeklyTransition::Fetch(self.goto_today()),
            WeeklyEvent::ToggleFold => {
                self.toggle_fold();
                WeeklyTransition::Rerender
            }
            WeeklyEvent::ToggleMode => {
                self.toggle_mode();
                WeeklyTransition::Rerender
            }
        }
    }

    pub fn commit(&mut self, load: WeeklyLoad) -> bool {
        if load.coordinate != self.coordinate {
            log_stale("weekly", self.id, &load.coordinate, &self.coordinate);
            return false;
        }
        self.loaded = Some(load);
        true
    }

    pub async fn refresh(&mut self, store: &dyn NoteStore) -> WeeklyModel {
        let load = self.request().load(store).await;
        self.commit(load);
        self.model()
    }

    pub fn model(&self) -> WeeklyModel {
        let ctx = self.ctx.as_ref();
        let formatter = ctx.formatter();
        let coordinate = self.coordinate;
        let today = ctx.today();

        // Years from the first note up to today, plus the navigated year.
        let this_year = today.year();
        let start_year = ctx.settings().start_date(formatter, today).year();
        let first_year = start_year.min(this_year).min(coordinate.year());
        let last_year = this_year.max(coordinate.year());
        let year_selector =
            Selector::from_values(first_year..=last_year, coordinate.year(), |year| {
                year.to_string()
            });
        let week_selector = Selector::padded(
            1..=formatter.weeks_in_year(coordinate.year()) as i32,
            coordinate.week() as i32,
        );
        let clamp_lines = self.folded.then(|| ctx.settings().fold_lines());

        let current = self
            .loaded
            .as_ref()
            .filter(|load| load.coordinate == coordinate);
        let Some(load) = current else {
            let week_start = coordinate.start_date(formatter.week_rule());
            return WeeklyModel {
                coordinate,
                week_start,
                weekly_path: ctx.resolve_for(&ctx.settings().week_note_path, week_start),
                year_selector,
                week_selector,
                days: Vec::new(),
                summary: None,
                clamp_lines,
                weekly_mode: self.weekly_mode,
                loading: true,
            };
        };

        let placeholders = ctx.placeholders();
        let days = load
            .days
            .iter()
            .map(|day| DaySection {
                date: day.date,
                title: day.title.clone(),
                path: day.path.clone(),
                body: day
                    .body
                    .clone()
                    .unwrap_or_else(|| placeholders.no_record.to_string()),
                recorded: day.body.is_some(),
            })
            .collect();
        let summary = WeeklySummary {
            title: format!("{}Week{:02}", coordinate.year(), coordinate.week()),
            path: load.weekly_path.clone(),
            body: load
                .summary
                .clone()
                .unwrap_or_else(|| placeholders.no_summary.to_string()),
            recorded: load.summary.is_some(),
        };

        WeeklyModel {
            coordinate,
            week_start: load.week_start,
            weekly_path: load.weekly_path.clone(),
            year_selector,
            week_selector,
            days,
            summary: Some(summary),
            clamp_lines,
            weekly_mode: self.weekly_mode,
            loading: false,
        }
    }
}

fn current_week(ctx: &ViewContext) -> WeekCoordinate {
    WeekCoordinate::from_date(ctx.today(), ctx.formatter().week_rule())
}

async fn load_day(
    ctx: &ViewContext,
    store: &dyn NoteStore,
    date: NaiveDate,
    view_id: ViewId,
) -> DayLoad {
    let settings = ctx.settings();
    let path = ctx.resolve_for(&settings.daily_note_path, date);
    let title = ctx.resolve_for(&settings.daily_note_title, date);
    let text = fetch_text(store, &path, view_id).await;
    let blocks = extract_blocks(&text);
    let body = find_block_by_heading(&blocks, &title).map(|block| block.body.clone());
    DayLoad {
        date,
        title,
        path,
        body,
    }
}
