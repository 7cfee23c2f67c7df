use calnote_core::view::{WeeklyEvent, WeeklyTransition};
use calnote_core::{FixedClock, Locale, MemoryNoteStore, Settings, ViewContext, WeeklyView};
use chrono::NaiveDate;
use futures::executor::block_on;
use std::sync::Arc;

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
        .with_note(
            "Daily/03/03-04.md",
            "## 2024-03-04 Monday\nStandup\n## Other\nx\n",
        )
        .with_note("Daily/03/03-05.md", "## Something else\nnope\n")
        .with_note("Week/2024/Week10.md", "Shipped v1\n")
}

#[test]
fn mounts_on_todays_week() {
    let view = WeeklyView::new(context(Settings::default()));

    assert_eq!(view.coordinate().year(), 2024);
    assert_eq!(view.coordinate().week(), 12);
    assert!(view.is_folded());
    assert!(!view.is_weekly_mode());
}

#[test]
fn week_ten_resolves_paths_and_sections() {
    let mut view = WeeklyView::new(context(Settings::default()));
    view.select_week(10);

    let model = block_on(view.refresh(&store()));
    assert_eq!(model.week_start, date(2024, 3, 3));
    assert_eq!(model.weekly_path, "Week/2024/Week10.md");
    assert_eq!(model.days.len(), 7);
    assert_eq!(model.days[0].date, date(2024, 3, 3));
    assert_eq!(model.days[6].date, date(2024, 3, 9));

    let monday = &model.days[1];
    assert_eq!(monday.title, "2024-03-04 Monday");
    assert_eq!(monday.path, "Daily/03/03-04.md");
    assert_eq!(monday.body, "Standup\n");
    assert!(monday.recorded);

    let untitled = &model.days[2];
    assert!(!untitled.recorded);
    assert_eq!(untitled.body, "(Nothing recorded this day)");
    assert!(!model.days[0].recorded);

    let summary = model.summary.unwrap();
    assert_eq!(summary.title, "2024Week10");
    assert_eq!(summary.path, "Week/2024/Week10.md");
    assert_eq!(summary.body, "Shipped v1\n");
    assert!(summary.recorded);
}

#[test]
fn missing_weekly_note_shows_no_summary_placeholder() {
    let mut view = WeeklyView::new(context(Settings::default()));
    view.select_week(11);

    let model = block_on(view.refresh(&store()));
    let summary = model.summary.unwrap();
    assert!(!summary.recorded);
    assert_eq!(summary.body, "(No summary for this week)");
    assert!(model.days.iter().all(|day| !day.recorded));
}

#[test]
fn mode_and_fold_toggles_rerender_without_refetch() {
    let mut view = WeeklyView::new(context(Settings::default()));
    view.select_week(10);
    block_on(view.refresh(&store()));

    assert!(matches!(
        view.apply(WeeklyEvent::ToggleMode),
        WeeklyTransition::Rerender
    ));
    assert!(matches!(
        view.apply(WeeklyEvent::ToggleFold),
        WeeklyTransition::Rerender
    ));
    let model = view.model();
    assert!(model.weekly_mode);
    assert_eq!(model.clamp_lines, None);
    assert!(!model.loading);
    assert!(model.days[1].recorded);
}

#[test]
fn stale_week_load_is_rejected() {
    let store = store();
    let mut view = WeeklyView::new(context(Settings::default()));

    let request_a = view.select_week(10);
    let request_b = view.select_week(11);
    assert!(view.commit(block_on(request_b.load(&store))));
    assert!(!view.commit(block_on(request_a.load(&store))));

    let model = view.model();
    assert_eq!(model.coordinate.week(), 11);
    assert!(!model.summary.unwrap().recorded);
}

#[test]
fn year_change_clamps_week_under_iso_rule() {
    let settings = Settings {
        locale: Locale::ZhCn,
        ..Settings::default()
    };
    let mut view = WeeklyView::new(context(settings));
    view.select_year(2020);
    view.select_week(53);
    view.select_year(2021);

    assert_eq!(view.coordinate().year(), 2021);
    assert_eq!(view.coordinate().week(), 52);
    assert_eq!(view.model().week_selector.len(), 52);
}

#[test]
fn chinese_locale_uses_localized_placeholders() {
    let settings = Settings {
        locale: Locale::ZhCn,
        ..Settings::default()
    };
    let mut view = WeeklyView::new(context(settings));

    let model = block_on(view.refresh(&MemoryNoteStore::new()));
    assert_eq!(model.days[0].body, "（此日无事记录）");
    assert_eq!(model.summary.unwrap().body, "（此周并无总结）");
}

#[test]
fn selectors_span_start_year_to_today() {
    let settings = Settings {
        daily_start_date: Some("2022-05-01".to_string()),
        ..Settings::default()
    };
    let view = WeeklyView::new(context(settings));

    let model = view.model();
    let years: Vec<i32> = model
        .year_selector
        .options
        .iter()
        .map(|option| option.value)
        .collect();
    assert_eq!(years, vec![2022, 2023, 2024]);
    assert_eq!(model.year_selector.active().unwrap().value, 2024);
    assert_eq!(model.week_selector.len(), 52);
    assert_eq!(model.week_selector.active().unwrap().label, "12");
}

#[test]
fn far_future_year_is_clamped_to_four_digits() {
    let mut view = WeeklyView::new(context(Settings::default()));
    let request = view.select_year(262_142);

    assert_eq!(request.coordinate().year(), 9999);
    assert_eq!(view.coordinate().week(), 12);
    assert_eq!(view.model().week_selector.len(), 52);
}
