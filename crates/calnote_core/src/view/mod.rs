//! Calendar view state machines.
//!
//! # Responsibility
//! - Own each view's coordinate and fold/mode flags.
//! - Turn navigation events into note requests and render models.
//!
//! # Invariants
//! - Re-fetching transitions return a request bound to the coordinate at
//!   request time; `commit` drops loads whose coordinate is no longer
//!   current.
//! - Fold and mode toggles re-render the last load without re-fetching.
//! - Store failures surface as empty note text, never as view errors.
//!
//! # See also
//! - `crate::view::mount` for dispatch from a view block.

pub mod context;
pub mod daily;
pub mod mount;
pub mod selector;
pub mod weekly;
pub mod year;

use crate::model::ViewId;
use crate::store::NoteStore;
use log::{debug, error};
use std::fmt::Debug;

pub use context::ViewContext;
pub use daily::{
    DailyEntry, DailyEvent, DailyLoad, DailyModel, DailyRequest, DailyTransition, DailyView,
    WeekLink,
};
pub use mount::{block_body, MountBlock, MountError, MountResult, View, ViewKind, ViewModel};
pub use selector::{Selector, SelectorOption};
pub use weekly::{
    DaySection, WeeklyEvent, WeeklyLoad, WeeklyModel, WeeklyRequest, WeeklySummary,
    WeeklyTransition, WeeklyView,
};
pub use year::{
    MonthParity, MonthTitle, WeekRow, YearCell, YearEvent, YearItem, YearModel, YearView,
};

/// Note text at `path`; absent notes and store failures read as empty.
pub(crate) async fn fetch_text(store: &dyn NoteStore, path: &str, view_id: ViewId) -> String {
    match store.read_note(path).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!(
                "event=note_fetch module=view status=missing view_id={} path={}",
                view_id, path
            );
            String::new()
        }
        Err(err) => {
            error!(
                "event=note_fetch module=view status=error view_id={} path={} error={}",
                view_id, path, err
            );
            String::new()
        }
    }
}

/// Presence check used for cross-links; failures read as absent.
pub(crate) async fn note_present(store: &dyn NoteStore, path: &str, view_id: ViewId) -> bool {
    match store.note_exists(path).await {
        Ok(exists) => exists,
        Err(err) => {
            error!(
                "event=note_exists module=view status=error view_id={} path={} error={}",
                view_id, path, err
            );
            false
        }
    }
}

pub(crate) fn log_stale(view: &str, view_id: ViewId, requested: &dyn Debug, current: &dyn Debug) {
    debug!(
        "event=view_commit module=view status=stale view={} view_id={} requested={:?} current={:?}",
        view, view_id, requested, current
    );
}
