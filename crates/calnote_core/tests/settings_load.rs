use calnote_core::{Locale, MomentFormatter, Settings, SettingsError};
use std::fs;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(dir.path().join("data.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_values_merge_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{
            "dailyNotePath": "Journal/${{YYYY}}/${{MM}}-${{DD}}.md",
            "dailyContentLineCount": 8,
            "dailyStartDate": "2022-01-15",
            "locale": "zh-cn",
            "unknownKey": true
        }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(
        settings.daily_note_path.as_str(),
        "Journal/${{YYYY}}/${{MM}}-${{DD}}.md"
    );
    assert_eq!(settings.daily_content_line_count, 8);
    assert_eq!(settings.daily_start_date.as_deref(), Some("2022-01-15"));
    assert_eq!(settings.locale, Locale::ZhCn);
    assert_eq!(
        settings.week_note_path,
        Settings::default().week_note_path
    );
    settings
        .validate(&MomentFormatter::new(settings.locale))
        .unwrap();
}

#[test]
fn invalid_json_is_reported() {
    let err = Settings::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)));
}

#[test]
fn validate_rejects_out_of_range_values() {
    let formatter = MomentFormatter::new(Locale::En);

    let too_small = Settings {
        daily_content_line_count: 0,
        ..Settings::default()
    };
    assert!(matches!(
        too_small.validate(&formatter),
        Err(SettingsError::InvalidLineCount(0))
    ));

    let bad_start = Settings {
        daily_start_date: Some("2024-13-01".to_string()),
        ..Settings::default()
    };
    assert!(matches!(
        bad_start.validate(&formatter),
        Err(SettingsError::InvalidStartDate(_))
    ));

    let blank_start = Settings {
        daily_start_date: Some("  ".to_string()),
        ..Settings::default()
    };
    blank_start.validate(&formatter).unwrap();
}

#[test]
fn settings_serialize_in_host_key_style() {
    let json = serde_json::to_value(Settings::default()).unwrap();
    assert_eq!(json["dailyNotePath"], "Daily/${{MM}}/${{MM}}-${{DD}}.md");
    assert_eq!(json["weekNotePath"], "Week/${{YYYY}}/Week${{ww}}.md");
    assert_eq!(json["dailyContentLineCount"], 5);
    assert_eq!(json["locale"], "en");
}
