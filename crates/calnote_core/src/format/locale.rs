//! Locale tables: names, week conventions and user-visible placeholders.

use crate::calendar::WeekRule;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const EN_WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const EN_WEEKDAYS_MIN: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const ZH_MONTHS: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "十二月",
];
const ZH_MONTHS_SHORT: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];
const ZH_WEEKDAYS: [&str; 7] = [
    "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
];
const ZH_WEEKDAYS_SHORT: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];
const ZH_WEEKDAYS_MIN: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Display locale. Also decides the week-numbering convention, the same way
/// host calendar libraries tie week rules to the locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-cn")]
    ZhCn,
}

/// Fixed strings shown in place of missing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    /// Daily note absent or without any heading.
    pub no_content: &'static str,
    /// Weekly view day without a matching section.
    pub no_record: &'static str,
    /// Weekly note absent or empty.
    pub no_summary: &'static str,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-cn",
        }
    }

    pub fn week_rule(self) -> WeekRule {
        match self {
            Self::En => WeekRule::US,
            Self::ZhCn => WeekRule::ISO,
        }
    }

    /// Full month name for 1-based `month`.
    pub fn month_name(self, month: u32) -> &'static str {
        let index = month_index(month);
        match self {
            Self::En => EN_MONTHS[index],
            Self::ZhCn => ZH_MONTHS[index],
        }
    }

    pub fn month_short(self, month: u32) -> &'static str {
        let index = month_index(month);
        match self {
            Self::En => EN_MONTHS_SHORT[index],
            Self::ZhCn => ZH_MONTHS_SHORT[index],
        }
    }

    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let index = weekday.num_days_from_sunday() as usize;
        match self {
            Self::En => EN_WEEKDAYS[index],
            Self::ZhCn => ZH_WEEKDAYS[index],
        }
    }

    pub fn weekday_short(self, weekday: Weekday) -> &'static str {
        let index = weekday.num_days_from_sunday() as usize;
        match self {
            Self::En => EN_WEEKDAYS_SHORT[index],
            Self::ZhCn => ZH_WEEKDAYS_SHORT[index],
        }
    }

    pub fn weekday_min(self, weekday: Weekday) -> &'static str {
        let index = weekday.num_days_from_sunday() as usize;
        match self {
            Self::En => EN_WEEKDAYS_MIN[index],
            Self::ZhCn => ZH_WEEKDAYS_MIN[index],
        }
    }

    /// Day-of-month ordinal (`Do` token).
    pub fn ordinal(self, value: u32) -> String {
        match self {
            Self::En => {
                let suffix = match (value % 10, value % 100) {
                    (_, 11..=13) => "th",
                    (1, _) => "st",
                    (2, _) => "nd",
                    (3, _) => "rd",
                    _ => "th",
                };
                format!("{value}{suffix}")
            }
            Self::ZhCn => format!("{value}日"),
        }
    }

    pub fn placeholders(self) -> Placeholders {
        match self {
            Self::En => Placeholders {
                no_content: "(This daily note has no content)",
                no_record: "(Nothing recorded this day)",
                no_summary: "(No summary for this week)",
            },
            Self::ZhCn => Placeholders {
                no_content: "（此日记无内容）",
                no_record: "（此日无事记录）",
                no_summary: "（此周并无总结）",
            },
        }
    }

    /// Title of the weekly cross-link shown next to a dated daily heading.
    pub(crate) fn week_link_pattern(self) -> &'static str {
        match self {
            Self::En => "gggg [Week] ww",
            Self::ZhCn => "gggg [第]ww[周]",
        }
    }

    /// Short day description attached to each year-view cell.
    pub(crate) fn day_info_pattern(self) -> &'static str {
        match self {
            Self::En => "MM-DD [Week] w dddd",
            Self::ZhCn => "MM-DD [第]w[周] dddd",
        }
    }

    /// Tooltip shown when a year-view day is inspected.
    pub(crate) fn tooltip_pattern(self) -> &'static str {
        match self {
            Self::En => "YYYY-MM-DD[\nWeek] w dddd",
            Self::ZhCn => "YYYY-MM-DD[\n第] w [周] dddd",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(Self::En),
            "zh-cn" | "zh" => Ok(Self::ZhCn),
            other => Err(format!("unsupported locale `{other}`; expected en|zh-cn")),
        }
    }
}

fn month_index(month: u32) -> usize {
    assert!((1..=12).contains(&month), "month out of range: {month}");
    (month - 1) as usize
}
