use calnote_core::template::{DateTokens, NavigatedTokens, UnresolvedReason};
use calnote_core::{Locale, MomentFormatter, Settings, Template};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn default_templates_preview_for_a_date() {
    let formatter = MomentFormatter::new(Locale::En);
    let settings = Settings::default();
    let day = date(2024, 3, 15);

    assert_eq!(
        settings.daily_note_path.preview(&formatter, day).text,
        "Daily/03/03-15.md"
    );
    assert_eq!(
        settings.daily_note_title.preview(&formatter, day).text,
        "2024-03-15 Friday"
    );
    assert_eq!(
        settings.week_note_path.preview(&formatter, day).text,
        "Week/2024/Week11.md"
    );
}

#[test]
fn navigated_tokens_mix_navigation_and_today() {
    let formatter = MomentFormatter::new(Locale::En);
    let tokens = NavigatedTokens::new(&formatter, date(2024, 3, 20), 1, 5);

    let resolved = Template::new("${{YYYY}}/${{MM}}/${{DD}} ${{dddd}}").resolve(&tokens);
    assert_eq!(resolved.text, "2024/01/05 Wednesday");
}

#[test]
fn resolution_is_deterministic() {
    let formatter = MomentFormatter::new(Locale::ZhCn);
    let tokens = DateTokens::new(&formatter, date(2025, 1, 1));
    let template = Template::new("Week/${{gggg}}/W${{ww}}-${{dd}}.md");

    let first = template.resolve(&tokens);
    let second = template.resolve(&tokens);
    assert_eq!(first, second);
    assert_eq!(first.text, "Week/2025/W01-三.md");
}

#[test]
fn empty_and_failing_placeholders_stay_verbatim() {
    let formatter = MomentFormatter::new(Locale::En);
    let tokens = DateTokens::new(&formatter, date(2024, 3, 15));

    let resolved = Template::new("a${{}}b${{ [oops }}c${{YYYY}}").resolve(&tokens);
    assert_eq!(resolved.text, "a${{}}b${{ [oops }}c2024");
    assert!(!resolved.is_complete());
    assert_eq!(resolved.unresolved.len(), 2);
    assert_eq!(resolved.unresolved[0].placeholder, "${{}}");
    assert_eq!(resolved.unresolved[0].reason, UnresolvedReason::EmptyToken);
    assert!(matches!(
        resolved.unresolved[1].reason,
        UnresolvedReason::FormatFailed(_)
    ));
}
