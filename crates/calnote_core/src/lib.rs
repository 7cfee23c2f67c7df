//! Calendar-templated note resolution for daily, weekly and year views.
//!
//! Paths and titles are rendered from `${{TOKEN}}` templates, note text is
//! fetched through a `NoteStore`, split into heading blocks, and exposed as
//! render models by three navigable view state machines.

pub mod calendar;
pub mod db;
pub mod format;
pub mod logging;
pub mod markdown;
pub mod model;
pub mod settings;
pub mod store;
pub mod template;
pub mod view;

pub use calendar::{Clock, FixedClock, SystemClock, WeekRule};
pub use format::{DateFormatter, FormatError, FormatResult, Locale, MomentFormatter};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use markdown::{extract_blocks, find_block_by_heading, ContentBlock};
pub use model::{DayCoordinate, ViewId, WeekCoordinate};
pub use settings::{Settings, SettingsError, SettingsResult};
pub use store::{
    MemoryNoteStore, NoteStore, SqliteNoteStore, StoreError, StoreResult, VaultDirStore,
};
pub use template::{Resolution, Template, TokenSource};
pub use view::{
    DailyView, MountBlock, MountError, View, ViewContext, ViewKind, ViewModel, WeeklyView,
    YearView,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
