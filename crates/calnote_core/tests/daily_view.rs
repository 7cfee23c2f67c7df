use calnote_core::view::{DailyEvent, DailyTransition};
use calnote_core::{
    DailyView, FixedClock, Locale, MemoryNoteStore, Settings, Template, ViewContext, WeeklyView,
};
use chrono::NaiveDate;
use futures::executor::block_on;
use std::sync::Arc;

const MARCH_15: &str = "\
intro line
## 2024-03-15 Friday
Morning run
Wrote tests
## Reading
Chapter 3
";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn context(settings: Settings) -> Arc<ViewContext> {
    Arc::new(ViewContext::with_clock(
        settings,
        Arc::new(FixedClock(date(2024, 3, 20))),
    ))
}

fn store() -> MemoryNoteStore {
    MemoryNoteStore::new()
        .with_note("Daily/03/03-15.md", MARCH_15)
        .with_note("Week/2024/Week11.md", "summary")
}

#[test]
fn mounts_on_today_folded_and_loading() {
    let view = DailyView::new(context(Settings::default()));

    assert_eq!(view.coordinate().date(), date(2024, 3, 20));
    assert!(view.is_folded());
    let model = view.model();
    assert!(model.loading);
    assert_eq!(model.note_path, "Daily/03/03-20.md");
}

#[test]
fn resolves_navigated_note_and_extracts_blocks() {
    let store = store();
    let mut view = DailyView::new(context(Settings::default()));

    let request = view.select_day(15);
    let load = block_on(request.load(&store));
    assert!(view.commit(load));
    let model = view.model();

    assert_eq!(model.note_path, "Daily/03/03-15.md");
    assert!(!model.loading);
    assert_eq!(model.placeholder, None);
    assert_eq!(model.clamp_lines, Some(5));
    assert_eq!(model.entries.len(), 2);

    let dated = &model.entries[0];
    assert_eq!(dated.heading, "2024-03-15 Friday");
    assert_eq!(dated.body, "Morning run\nWrote tests\n");
    assert_eq!(dated.link, "Daily/03/03-15.md#2024-03-15 Friday");
    let week_link = dated.week_link.as_ref().unwrap();
    assert_eq!(week_link.title, "2024 Week 11");
    assert_eq!(week_link.path, "Week/2024/Week11.md");
    assert!(week_link.navigable);

    let plain = &model.entries[1];
    assert_eq!(plain.heading, "Reading");
    assert_eq!(plain.body, "Chapter 3\n");
    assert_eq!(plain.week_link, None);
}

#[test]
fn week_link_without_weekly_note_is_not_navigable() {
    let store = MemoryNoteStore::new().with_note("Daily/03/03-15.md", MARCH_15);
    let mut view = DailyView::new(context(Settings::default()));

    let model = {
        view.select_day(15);
        block_on(view.refresh(&store))
    };
    let week_link = model.entries[0].week_link.as_ref().unwrap();
    assert!(!week_link.navigable);
}

#[test]
fn absent_note_shows_no_content_placeholder() {
    let mut view = DailyView::new(context(Settings::default()));
    view.select_day(16);

    let model = block_on(view.refresh(&store()));
    assert!(model.entries.is_empty());
    assert_eq!(
        model.placeholder.as_deref(),
        Some("(This daily note has no content)")
    );
}

#[test]
fn chinese_locale_uses_localized_placeholder_and_names() {
    let settings = Settings {
        locale: Locale::ZhCn,
        ..Settings::default()
    };
    let mut view = DailyView::new(context(settings));

    let model = block_on(view.refresh(&MemoryNoteStore::new()));
    assert_eq!(model.placeholder.as_deref(), Some("（此日记无内容）"));
    assert_eq!(model.month_selector.active().unwrap().label, "三月");
}

#[test]
fn stale_load_is_rejected_after_newer_commit() {
    let store = store();
    let mut view = DailyView::new(context(Settings::default()));

    let request_a = view.select_day(15);
    let request_b = view.select_day(16);
    let load_b = block_on(request_b.load(&store));
    assert!(view.commit(load_b));

    let load_a = block_on(request_a.load(&store));
    assert!(!view.commit(load_a));

    let model = view.model();
    assert_eq!(model.coordinate.day(), 16);
    assert!(model.entries.is_empty());
    assert!(model.placeholder.is_some());
}

#[test]
fn month_change_clamps_day_and_rebuilds_selectors() {
    let mut view = DailyView::new(context(Settings::default()));
    view.select_month(1);
    view.select_day(31);
    view.select_month(2);

    let model = view.model();
    assert_eq!(model.coordinate.month(), 2);
    assert_eq!(model.coordinate.day(), 29);
    assert_eq!(model.month_selector.len(), 12);
    assert_eq!(model.month_selector.active().unwrap().label, "February");
    assert_eq!(model.day_selector.len(), 29);
    assert_eq!(model.day_selector.active().unwrap().label, "29");
}

#[test]
fn fold_toggle_rerenders_without_refetch() {
    let mut view = DailyView::new(context(Settings::default()));
    view.select_day(15);
    block_on(view.refresh(&store()));

    let transition = view.apply(DailyEvent::ToggleFold);
    assert!(matches!(transition, DailyTransition::Rerender));
    let model = view.model();
    assert_eq!(model.clamp_lines, None);
    assert_eq!(model.entries.len(), 2);
}

#[test]
fn goto_today_requests_current_date() {
    let mut view = DailyView::new(context(Settings::default()));
    view.select_month(7);

    match view.apply(DailyEvent::GotoToday) {
        DailyTransition::Fetch(request) => {
            assert_eq!(request.coordinate().date(), date(2024, 3, 20));
        }
        DailyTransition::Rerender => panic!("goto today must fetch"),
    }
}

#[test]
fn non_navigated_tokens_follow_today() {
    let settings = Settings {
        daily_note_path: Template::new("Journal/${{YYYY}}/${{MM}}-${{DD}} ${{ddd}}.md"),
        ..Settings::default()
    };
    let mut view = DailyView::new(context(settings));
    view.select_month(1);

    let model = view.model();
    assert_eq!(model.note_path, "Journal/2024/01-20 Wed.md");
}

#[test]
fn impossible_heading_date_keeps_body_without_week_link() {
    let store = MemoryNoteStore::new().with_note(
        "Daily/03/03-15.md",
        "## 2024-02-30 Bogus\nstill here\n",
    );
    let mut view = DailyView::new(context(Settings::default()));
    view.select_day(15);

    let model = block_on(view.refresh(&store));
    assert_eq!(model.entries.len(), 1);
    assert_eq!(model.entries[0].heading, "2024-02-30 Bogus");
    assert_eq!(model.entries[0].body, "still here\n");
    assert_eq!(model.entries[0].week_link, None);
}

#[test]
fn year_end_week_link_matches_weekly_view_path() {
    let ctx = context(Settings::default());
    let store = MemoryNoteStore::new()
        .with_note("Daily/12/12-31.md", "## 2024-12-31 Tuesday\nwrap up\n");
    let mut daily = DailyView::new(Arc::clone(&ctx));
    daily.select_month(12);
    daily.select_day(31);

    let model = block_on(daily.refresh(&store));
    let week_link = model.entries[0].week_link.as_ref().unwrap();
    assert_eq!(week_link.title, "2025 Week 01");
    assert_eq!(week_link.path, "Week/2024/Week01.md");

    let mut weekly = WeeklyView::new(ctx);
    weekly.select_year(2025);
    weekly.select_week(1);
    assert_eq!(weekly.model().weekly_path, week_link.path);
}
