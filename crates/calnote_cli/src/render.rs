//! Plain-text rendering of view models for the terminal.

use calnote_core::markdown::clamp_lines;
use calnote_core::view::{DailyModel, WeeklyModel, YearItem, YearModel};
use calnote_core::ViewModel;
use std::fmt::Write;

pub fn render_text(model: &ViewModel) -> String {
    let mut out = String::new();
    match model {
        ViewModel::Daily(model) => render_daily(&mut out, model),
        ViewModel::Weekly(model) => render_weekly(&mut out, model),
        ViewModel::Year(model) => render_year(&mut out, model),
    }
    out
}

fn clamp(body: &str, visible: Option<u32>) -> &str {
    match visible {
        Some(lines) => clamp_lines(body, lines as usize),
        None => body.trim_end_matches('\n'),
    }
}

fn render_daily(out: &mut String, model: &DailyModel) {
    let _ = writeln!(out, "== {} ==", model.note_path);
    if let Some(placeholder) = &model.placeholder {
        let _ = writeln!(out, "{placeholder}");
        return;
    }
    for entry in &model.entries {
        let _ = write!(out, "\n## {}  [{}]", entry.heading, entry.link);
        if let Some(week) = &entry.week_link {
            let marker = if week.navigable { "->" } else { "--" };
            let _ = write!(out, "  {marker} {} ({})", week.title, week.path);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", clamp(&entry.body, model.clamp_lines));
    }
}

fn render_weekly(out: &mut String, model: &WeeklyModel) {
    let _ = writeln!(
        out,
        "== {}W{:02} from {} ==",
        model.coordinate.year(),
        model.coordinate.week(),
        model.week_start
    );
    if model.weekly_mode {
        if let Some(summary) = &model.summary {
            let _ = writeln!(out, "\n## {}  [{}]", summary.title, summary.path);
            let _ = writeln!(out, "{}", summary.body.trim_end_matches('\n'));
        }
        return;
    }
    for day in &model.days {
        let _ = writeln!(out, "\n## {}  [{}]", day.title, day.path);
        let _ = writeln!(out, "{}", clamp(&day.body, model.clamp_lines));
    }
}

fn render_year(out: &mut String, model: &YearModel) {
    let _ = writeln!(out, "== {} ==", model.year);
    for row in &model.rows {
        let _ = write!(out, "{:<12}", row.label);
        for item in &row.items {
            match item {
                YearItem::MonthTitle(title) => {
                    let _ = write!(out, " |{}|", title.label);
                }
                YearItem::Day(cell) => {
                    let mark = if cell.is_today {
                        '*'
                    } else if cell.is_past {
                        '.'
                    } else {
                        ' '
                    };
                    let _ = write!(out, " {}{}", cell.label, mark);
                }
            }
        }
        let _ = writeln!(out);
    }
    if let Some(tooltip) = &model.tooltip {
        let _ = writeln!(out, "\n{tooltip}");
    }
}
