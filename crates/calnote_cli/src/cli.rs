use calnote_core::Locale;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// calnote - calendar views over a folder of daily and weekly notes
///
/// ```bash
/// calnote --vault ~/notes daily                 # today's daily note blocks
/// calnote --vault ~/notes daily --month 3 --day 15
/// calnote --vault ~/notes weekly --year 2024 --week 10 --summary
/// calnote year --inspect 3-15                   # year grid with a tooltip
/// calnote --db mirror.sqlite mount view.yaml    # mount a `type:` block
/// calnote preview '${{YYYY}}-${{MM}}-${{DD}}'   # render a template for today
/// ```
#[derive(Parser, Debug)]
#[command(name = "calnote", version, about)]
pub struct Cli {
    /// Vault root directory (defaults to the current directory)
    #[arg(long, global = true, conflicts_with = "db")]
    pub vault: Option<PathBuf>,

    /// Read notes from a SQLite note mirror instead of a vault directory
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Settings JSON file; missing keys take defaults
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Display locale, overriding the settings file: en|zh-cn
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Write rolling logs into this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print the render model as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Blocks of one daily note
    Daily {
        /// Month, 1-12
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Day of month
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=31))]
        day: Option<u32>,
        /// Show full block bodies
        #[arg(long)]
        unfold: bool,
    },
    /// Seven daily sections of one week, plus its weekly note
    Weekly {
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=53))]
        week: Option<u32>,
        #[arg(long)]
        unfold: bool,
        /// Show the weekly note instead of the day sections
        #[arg(long)]
        summary: bool,
    },
    /// Day grid of a whole year
    Year {
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: Option<i32>,
        /// Show the tooltip of one day, as MONTH-DAY
        #[arg(long)]
        inspect: Option<String>,
    },
    /// Mount the view named by a YAML view block, fenced or bare (`-` reads stdin)
    Mount { block: PathBuf },
    /// Render templates against today
    Preview {
        /// Template to render; defaults to the configured templates
        template: Option<String>,
    },
}
