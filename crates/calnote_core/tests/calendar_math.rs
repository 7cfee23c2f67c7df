use calnote_core::calendar::{
    days_in_month, is_leap_year, week_number, week_start_date, week_year, weeks_in_year,
};
use calnote_core::WeekRule;
use chrono::{Duration, NaiveDate};

#[test]
fn february_follows_gregorian_leap_rules() {
    assert_eq!(days_in_month(2000, 2), 29);
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(1900, 2), 28);
    assert_eq!(days_in_month(2023, 2), 28);
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
}

#[test]
fn week_starts_are_consecutive_and_stay_near_their_year() {
    for rule in [WeekRule::ISO, WeekRule::US] {
        for year in 1995..=2035 {
            let lower = NaiveDate::from_ymd_opt(year, 1, 1).unwrap() - Duration::days(7);
            let upper = NaiveDate::from_ymd_opt(year, 12, 31).unwrap() + Duration::days(7);
            let weeks = weeks_in_year(year, rule);
            assert!((52..=53).contains(&weeks), "{year} has {weeks} weeks");

            for week in 1..=weeks {
                let start = week_start_date(year, week, rule);
                assert!(start > lower && start < upper, "{year}w{week} -> {start}");
                assert_eq!(week_number(start, rule), week);
                assert_eq!(week_year(start, rule), year);
                if week < weeks {
                    assert_eq!(
                        week_start_date(year, week + 1, rule) - start,
                        Duration::days(7)
                    );
                }
            }
        }
    }
}
