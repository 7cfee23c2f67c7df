//! Command-line host for calnote views.
//!
//! Mounts a view against a vault directory or a SQLite note mirror, applies
//! the requested navigation and prints the render model.

mod cli;
mod render;

use calnote_core::calendar::{Clock, FixedClock, SystemClock};
use calnote_core::{
    default_log_level, init_logging, DailyView, DateFormatter, NoteStore, Settings,
    SqliteNoteStore, Template, VaultDirStore, View, ViewContext, ViewModel, WeeklyView, YearView,
};
use clap::Parser;
use cli::{Cli, Command};
use futures::executor::block_on;
use log::info;
use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = absolute(log_dir)?;
        init_logging(level, &log_dir.to_string_lossy())?;
    }

    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    let clock: Arc<dyn Clock> = match cli.today {
        Some(today) => Arc::new(FixedClock(today)),
        None => Arc::new(SystemClock),
    };
    let ctx = Arc::new(ViewContext::with_clock(settings, clock));
    ctx.settings().validate(ctx.formatter())?;

    let store = open_store(&cli)?;
    info!(
        "event=cli_run module=cli status=start locale={} command={:?}",
        ctx.settings().locale.as_str(),
        cli.command
    );

    match cli.command {
        Command::Daily { month, day, unfold } => {
            let mut view = DailyView::new(Arc::clone(&ctx));
            if let Some(month) = month {
                view.select_month(month);
            }
            if let Some(day) = day {
                let days = ctx
                    .formatter()
                    .days_in_month(view.coordinate().year(), view.coordinate().month());
                if day > days {
                    return Err(format!("day {day} does not exist in the selected month").into());
                }
                view.select_day(day);
            }
            if unfold {
                view.toggle_fold();
            }
            let model = block_on(view.refresh(store.as_ref()));
            emit(cli.json, &ViewModel::Daily(model))
        }
        Command::Weekly {
            year,
            week,
            unfold,
            summary,
        } => {
            let mut view = WeeklyView::new(Arc::clone(&ctx));
            if let Some(year) = year {
                view.select_year(year);
            }
            if let Some(week) = week {
                let weeks = ctx.formatter().weeks_in_year(view.coordinate().year());
                if week > weeks {
                    return Err(format!("week {week} does not exist in the selected year").into());
                }
                view.select_week(week);
            }
            if unfold {
                view.toggle_fold();
            }
            if summary {
                view.toggle_mode();
            }
            let model = block_on(view.refresh(store.as_ref()));
            emit(cli.json, &ViewModel::Weekly(model))
        }
        Command::Year { year, inspect } => {
            let mut view = YearView::new(Arc::clone(&ctx));
            if let Some(year) = year {
                view.select_year(year);
            }
            if let Some(inspect) = inspect {
                let (month, day) = parse_month_day(&inspect)?;
                if calnote_core::calendar::days_in_month(view.year(), month) < day {
                    return Err(format!("{inspect} does not exist in {}", view.year()).into());
                }
                view.inspect_day(month, day);
            }
            emit(cli.json, &ViewModel::Year(view.model()))
        }
        Command::Mount { block } => {
            let source = read_block(&block)?;
            let mut view = View::mount_block(&source, Arc::clone(&ctx))?;
            let model = block_on(view.refresh(store.as_ref()));
            emit(cli.json, &model)
        }
        Command::Preview { template } => {
            let today = ctx.today();
            let templates = match template {
                Some(source) => vec![("template", Template::new(source))],
                None => {
                    let settings = ctx.settings();
                    vec![
                        ("dailyNotePath", settings.daily_note_path.clone()),
                        ("dailyNoteTitle", settings.daily_note_title.clone()),
                        ("weekNotePath", settings.week_note_path.clone()),
                    ]
                }
            };
            for (name, template) in templates {
                let resolution = template.preview(ctx.formatter(), today);
                println!("{name}: {template} -> {}", resolution.text);
                for unresolved in &resolution.unresolved {
                    println!("  unresolved {} ({:?})", unresolved.placeholder, unresolved.reason);
                }
            }
            Ok(())
        }
    }
}

fn open_store(cli: &Cli) -> CliResult<Box<dyn NoteStore>> {
    if let Some(db) = &cli.db {
        return Ok(Box::new(SqliteNoteStore::open(db)?));
    }
    let root = match &cli.vault {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    Ok(Box::new(VaultDirStore::new(root)))
}

fn emit(json: bool, model: &ViewModel) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(model)?);
    } else {
        print!("{}", render::render_text(model));
    }
    Ok(())
}

fn read_block(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn parse_month_day(value: &str) -> CliResult<(u32, u32)> {
    let (month, day) = value
        .split_once('-')
        .ok_or_else(|| format!("expected MONTH-DAY, got `{value}`"))?;
    let month: u32 = month.trim().parse()?;
    let day: u32 = day.trim().parse()?;
    if !(1..=12).contains(&month) || day == 0 {
        return Err(format!("`{value}` is not a calendar day").into());
    }
    Ok((month, day))
}

fn absolute(path: &Path) -> CliResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
