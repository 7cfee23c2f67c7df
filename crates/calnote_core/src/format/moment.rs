//! moment.js-compatible display tokens over `chrono` dates.
//!
//! Supported tokens: `YYYY YY gggg gg GGGG GG M MM MMM MMMM D DD Do DDD DDDD
//! d dd ddd dddd e E w ww W WW Q`. Text inside `[...]` is emitted verbatim and
//! every other character is a literal. Parsing accepts the numeric tokens
//! `YYYY M MM D DD` and literal separators.

use crate::calendar;
use crate::calendar::WeekRule;
use crate::format::{DateFormatter, FormatError, FormatResult, Locale};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    WeekYear4,
    WeekYear2,
    IsoWeekYear4,
    IsoWeekYear2,
    Month,
    Month2,
    MonthShort,
    MonthLong,
    Day,
    Day2,
    DayOrdinal,
    DayOfYear,
    DayOfYear3,
    Weekday,
    WeekdayMin,
    WeekdayShort,
    WeekdayLong,
    LocaleWeekday,
    IsoWeekday,
    Week,
    Week2,
    IsoWeek,
    IsoWeek2,
    Quarter,
}

// Longest spelling first so that `MMMM` wins over `MM`.
const TOKENS: &[(&str, Token)] = &[
    ("YYYY", Token::Year4),
    ("gggg", Token::WeekYear4),
    ("GGGG", Token::IsoWeekYear4),
    ("MMMM", Token::MonthLong),
    ("DDDD", Token::DayOfYear3),
    ("dddd", Token::WeekdayLong),
    ("MMM", Token::MonthShort),
    ("DDD", Token::DayOfYear),
    ("ddd", Token::WeekdayShort),
    ("YY", Token::Year2),
    ("gg", Token::WeekYear2),
    ("GG", Token::IsoWeekYear2),
    ("MM", Token::Month2),
    ("Do", Token::DayOrdinal),
    ("DD", Token::Day2),
    ("dd", Token::WeekdayMin),
    ("ww", Token::Week2),
    ("WW", Token::IsoWeek2),
    ("M", Token::Month),
    ("D", Token::Day),
    ("d", Token::Weekday),
    ("e", Token::LocaleWeekday),
    ("E", Token::IsoWeekday),
    ("w", Token::Week),
    ("W", Token::IsoWeek),
    ("Q", Token::Quarter),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Token { text: &'static str, token: Token },
    Literal(&'a str),
}

/// Default `DateFormatter` interpreting moment.js display tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MomentFormatter {
    locale: Locale,
}

impl MomentFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn render(&self, date: NaiveDate, token: Token) -> String {
        let locale = self.locale;
        let rule = locale.week_rule();
        match token {
            Token::Year4 => format!("{:04}", date.year()),
            Token::Year2 => format!("{:02}", date.year().rem_euclid(100)),
            Token::WeekYear4 => format!("{:04}", calendar::week_year(date, rule)),
            Token::WeekYear2 => format!("{:02}", calendar::week_year(date, rule).rem_euclid(100)),
            Token::IsoWeekYear4 => format!("{:04}", date.iso_week().year()),
            Token::IsoWeekYear2 => format!("{:02}", date.iso_week().year().rem_euclid(100)),
            Token::Month => date.month().to_string(),
            Token::Month2 => format!("{:02}", date.month()),
            Token::MonthShort => locale.month_short(date.month()).to_string(),
            Token::MonthLong => locale.month_name(date.month()).to_string(),
            Token::Day => date.day().to_string(),
            Token::Day2 => format!("{:02}", date.day()),
            Token::DayOrdinal => locale.ordinal(date.day()),
            Token::DayOfYear => date.ordinal().to_string(),
            Token::DayOfYear3 => format!("{:03}", date.ordinal()),
            Token::Weekday => date.weekday().num_days_from_sunday().to_string(),
            Token::WeekdayMin => locale.weekday_min(date.weekday()).to_string(),
            Token::WeekdayShort => locale.weekday_short(date.weekday()).to_string(),
            Token::WeekdayLong => locale.weekday_name(date.weekday()).to_string(),
            Token::LocaleWeekday => rule.weekday_offset(date.weekday()).to_string(),
            Token::IsoWeekday => date.weekday().number_from_monday().to_string(),
            Token::Week => calendar::week_number(date, rule).to_string(),
            Token::Week2 => format!("{:02}", calendar::week_number(date, rule)),
            Token::IsoWeek => date.iso_week().week().to_string(),
            Token::IsoWeek2 => format!("{:02}", date.iso_week().week()),
            Token::Quarter => ((date.month() - 1) / 3 + 1).to_string(),
        }
    }
}

impl DateFormatter for MomentFormatter {
    fn format(&self, date: NaiveDate, pattern: &str) -> FormatResult<String> {
        let mut out = String::with_capacity(pattern.len() + 8);
        for piece in tokenize(pattern)? {
            match piece {
                Piece::Token { token, .. } => out.push_str(&self.render(date, token)),
                Piece::Literal(text) => out.push_str(text),
            }
        }
        Ok(out)
    }

    fn parse(&self, input: &str, pattern: &str) -> FormatResult<NaiveDate> {
        let unparseable = || FormatError::Unparseable {
            input: input.to_string(),
            pattern: pattern.to_string(),
        };

        let mut rest = input;
        let mut year = None;
        let mut month = 1;
        let mut day = 1;
        for piece in tokenize(pattern)? {
            match piece {
                Piece::Literal(text) => {
                    rest = rest.strip_prefix(text).ok_or_else(unparseable)?;
                }
                Piece::Token { text, token } => {
                    let width = match token {
                        Token::Year4 => 4,
                        Token::Month | Token::Month2 | Token::Day | Token::Day2 => 2,
                        _ => {
                            return Err(FormatError::UnsupportedParseToken {
                                pattern: pattern.to_string(),
                                token: text.to_string(),
                            })
                        }
                    };
                    let (value, remaining) = take_digits(rest, width).ok_or_else(unparseable)?;
                    rest = remaining;
                    match token {
                        Token::Year4 => year = Some(value as i32),
                        Token::Month | Token::Month2 => month = value,
                        _ => day = value,
                    }
                }
            }
        }

        if !rest.is_empty() {
            return Err(unparseable());
        }
        year.and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
            .ok_or_else(unparseable)
    }

    fn week_rule(&self) -> WeekRule {
        self.locale.week_rule()
    }
}

fn tokenize(pattern: &str) -> FormatResult<Vec<Piece<'_>>> {
    let mut pieces = Vec::new();
    let mut rest = pattern;
    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            let end = rest.find(']').ok_or_else(|| FormatError::UnterminatedLiteral {
                pattern: pattern.to_string(),
            })?;
            pieces.push(Piece::Literal(&rest[1..end]));
            rest = &rest[end + 1..];
            continue;
        }

        if let Some(&(text, token)) = TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            pieces.push(Piece::Token { text, token });
            rest = &rest[text.len()..];
            continue;
        }

        let width = ch.len_utf8();
        pieces.push(Piece::Literal(&rest[..width]));
        rest = &rest[width..];
    }
    Ok(pieces)
}

fn take_digits(input: &str, max_width: usize) -> Option<(u32, &str)> {
    let width = input
        .bytes()
        .take(max_width)
        .take_while(u8::is_ascii_digit)
        .count();
    if width == 0 {
        return None;
    }
    let value = input[..width].parse().ok()?;
    Some((value, &input[width..]))
}
