//! Daily view: one daily note, split into heading blocks.
//!
//! # Responsibility
//! - Navigate month/day within today's year.
//! - Resolve the daily note path, fetch it and expose its blocks.
//! - Cross-link dated headings to their weekly note.
//!
//! # Invariants
//! - `MM`/`DD` in the path template follow the navigated date; every other
//!   token follows today.
//! - Toggling fold never re-fetches.

use crate::markdown::{extract_blocks, ContentBlock};
use crate::model::{DayCoordinate, ViewId};
use crate::settings::START_DATE_PATTERN;
use crate::store::NoteStore;
use crate::template::NavigatedTokens;
use crate::view::context::ViewContext;
use crate::view::selector::Selector;
use crate::view::{fetch_text, log_stale, note_present};
use futures::future::join_all;
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyEvent {
    SelectMonth(u32),
    SelectDay(u32),
    GotoToday,
    ToggleFold,
}

#[derive(Debug)]
pub enum DailyTransition {
    /// Coordinate changed; load and commit the request.
    Fetch(DailyRequest),
    /// Only display flags changed; call `model` again.
    Rerender,
}

/// Pending fetch for one coordinate.
#[derive(Debug, Clone)]
pub struct DailyRequest {
    view_id: ViewId,
    coordinate: DayCoordinate,
    ctx: Arc<ViewContext>,
}

impl DailyRequest {
    pub fn coordinate(&self) -> DayCoordinate {
        self.coordinate
    }

    /// Fetches the daily note and probes the weekly notes it links to.
    pub async fn load(self, store: &dyn NoteStore) -> DailyLoad {
        let note_path = note_path(&self.ctx, self.coordinate);
        let text = fetch_text(store, &note_path, self.view_id).await;
        let blocks = extract_blocks(&text);

        let week_links = join_all(
            blocks
                .iter()
                .map(|block| week_link(&self.ctx, store, block, self.view_id)),
        )
        .await;

        debug!(
            "event=daily_load module=view status=ok view_id={} path={} blocks={}",
            self.view_id,
            note_path,
            blocks.len()
        );
        DailyLoad {
            coordinate: self.coordinate,
            note_path,
            entries: blocks.into_iter().zip(week_links).collect(),
        }
    }
}

/// Fetched note content for one coordinate, not yet committed.
#[derive(Debug, Clone)]
pub struct DailyLoad {
    coordinate: DayCoordinate,
    note_path: String,
    entries: Vec<(ContentBlock, Option<WeekLink>)>,
}

impl DailyLoad {
    pub fn coordinate(&self) -> DayCoordinate {
        self.coordinate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekLink {
    /// e.g. `2024 Week 11`.
    pub title: String,
    pub path: String,
    /// Whether the weekly note exists.
    pub navigable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyEntry {
    pub heading: String,
    /// Raw markdown body.
    pub body: String,
    /// `note_path#heading`.
    pub link: String,
    pub week_link: Option<WeekLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyModel {
    pub coordinate: DayCoordinate,
    pub note_path: String,
    pub month_selector: Selector,
    pub day_selector: Selector,
    pub entries: Vec<DailyEntry>,
    /// Visible lines per body while folded.
    pub clamp_lines: Option<u32>,
    /// Shown instead of entries when the note has no blocks.
    pub placeholder: Option<String>,
    /// No load has been committed for the current coordinate yet.
    pub loading: bool,
}

#[derive(Debug)]
pub struct DailyView {
    id: ViewId,
    ctx: Arc<ViewContext>,
    coordinate: DayCoordinate,
    folded: bool,
    loaded: Option<DailyLoad>,
}

impl DailyView {
    /// Mounts on today, folded.
    pub fn new(ctx: Arc<ViewContext>) -> Self {
        let coordinate = DayCoordinate::from_date(ctx.today());
        let id = Uuid::new_v4();
        info!(
            "event=view_mount module=view status=ok view=daily view_id={} coordinate={:?}",
            id, coordinate
        );
        Self {
            id,
            ctx,
            coordinate,
            folded: true,
            loaded: None,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn coordinate(&self) -> DayCoordinate {
        self.coordinate
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Request for the current coordinate.
    pub fn request(&self) -> DailyRequest {
        DailyRequest {
            view_id: self.id,
            coordinate: self.coordinate,
            ctx: Arc::clone(&self.ctx),
        }
    }

    /// # Panics
    /// Panics when `month` is outside `1..=12`.
    pub fn select_month(&mut self, month: u32) -> DailyRequest {
        self.coordinate = self.coordinate.with_month(month);
        self.request()
    }

    /// # Panics
    /// Panics when `day` is outside the selected month.
    pub fn select_day(&mut self, day: u32) -> DailyRequest {
        self.coordinate = self.coordinate.with_day(day);
        self.request()
    }

    pub fn goto_today(&mut self) -> DailyRequest {
        self.coordinate = DayCoordinate::from_date(self.ctx.today());
        self.request()
    }

    pub fn toggle_fold(&mut self) {
        self.folded = !self.folded;
    }

    pub fn apply(&mut self, event: DailyEvent) -> DailyTransition {
        debug!(
            "event=view_event module=view status=start view=daily view_id={} event={:?}",
            self.id, event
        );
        match event {
            DailyEvent::SelectMonth(month) => DailyTransition::Fetch(self.select_month(month)),
            DailyEvent::SelectDay(day) => DailyTransition::Fetch(self.select_day(day)),
            DailyEvent::GotoToday => DailyTransition::Fetch(self.goto_today()),
            DailyEvent::ToggleFold => {
                self.toggle_fold();
                DailyTransition::Rerender
            }
        }
    }

    /// Applies `load` if it still matches the current coordinate.
    pub fn commit(&mut self, load: DailyLoad) -> bool {
        if load.coordinate != self.coordinate {
            log_stale("daily", self.id, &load.coordinate, &self.coordinate);
            return false;
        }
        self.loaded = Some(load);
        true
    }

    /// Loads and commits the current coordinate, then renders.
    pub async fn refresh(&mut self, store: &dyn NoteStore) -> DailyModel {
        let load = self.request().load(store).await;
        self.commit(load);
        self.model()
    }

    pub fn model(&self) -> DailyModel {
        let ctx = self.ctx.as_ref();
        let coordinate = self.coordinate;
        let locale = ctx.settings().locale;
        let month_selector = Selector::from_values(1..=12, coordinate.month() as i32, |month| {
            locale.month_name(month as u32).to_string()
        });
        let day_count = ctx
            .formatter()
            .days_in_month(coordinate.year(), coordinate.month());
        let day_selector = Selector::padded(1..=day_count as i32, coordinate.day() as i32);
        let clamp_lines = self.folded.then(|| ctx.settings().fold_lines());

        let current = self
            .loaded
            .as_ref()
            .filter(|load| load.coordinate == coordinate);
        let Some(load) = current else {
            return DailyModel {
                coordinate,
                note_path: note_path(ctx, coordinate),
                month_selector,
                day_selector,
                entries: Vec::new(),
                clamp_lines,
                placeholder: None,
                loading: true,
            };
        };

        let entries: Vec<DailyEntry> = load
            .entries
            .iter()
            .map(|(block, week_link)| DailyEntry {
                heading: block.heading.clone(),
                body: block.body.clone(),
                link: format!("{}#{}", load.note_path, block.heading),
                week_link: week_link.clone(),
            })
            .collect();
        let placeholder = entries
            .is_empty()
            .then(|| ctx.placeholders().no_content.to_string());

        DailyModel {
            coordinate,
            note_path: load.note_path.clone(),
            month_selector,
            day_selector,
            entries,
            clamp_lines,
            placeholder,
            loading: false,
        }
    }
}

fn note_path(ctx: &ViewContext, coordinate: DayCoordinate) -> String {
    let tokens = NavigatedTokens::new(
        ctx.formatter(),
        ctx.today(),
        coordinate.month(),
        coordinate.day(),
    );
    ctx.resolve_with(&ctx.settings().daily_note_path, &tokens)
}

async fn week_link(
    ctx: &ViewContext,
    store: &dyn NoteStore,
    block: &ContentBlock,
    view_id: ViewId,
) -> Option<WeekLink> {
    let raw = block.heading_date()?;
    let date = match ctx.formatter().parse(raw, START_DATE_PATTERN) {
        Ok(date) => date,
        Err(err) => {
            warn!(
                "event=week_link module=view status=error view_id={} heading={} err={}",
                view_id, raw, err
            );
            return None;
        }
    };
    let week_start = ctx.formatter().start_of_week(date);
    let path = ctx.resolve_for(&ctx.settings().week_note_path, week_start);
    let title = ctx.format_or_pattern(date, ctx.settings().locale.week_link_pattern());
    let navigable = note_present(store, &path, view_id).await;
    Some(WeekLink {
        title,
        path,
        navigable,
    })
}
