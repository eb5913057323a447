mod report;
mod tui;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use officeday_core::{
    apply_settings_args, parse_day, parse_month, DayStatus, FileSettingsRepository,
    FileStatusRepository, HistoryUseCase, ImportService, MonthId, Settings, TrackerService,
    WorkPattern,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "officeday")]
#[command(about = "Track in-office days against a monthly attendance target", long_about = None)]
struct Cli {
    /// Directory for settings and day statuses (default: ~/.officeday)
    #[arg(long, global = true, env = "OFFICEDAY_HOME")]
    data_dir: Option<PathBuf>,

    /// Month to work on: 2025-03, mar, next, prev, +2 ...
    #[arg(long, short, global = true)]
    month: Option<String>,

    /// Working-day pattern for this run: all, monfri
    #[arg(long, global = true)]
    pattern: Option<WorkPattern>,

    /// Target percentage for this run
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=100))]
    percent: Option<u32>,

    /// Ignore bank holidays for this run
    #[arg(long, global = true)]
    no_holidays: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the month calendar and progress
    Show {
        /// Print the month report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a day's status (usage: mark 14 in, mark today out, mark 2025-03-03 excluded)
    Mark {
        day: String,
        /// in, out, excluded or unset
        status: DayStatus,
    },
    /// Advance a day to its next status (unset -> in -> out -> excluded)
    Cycle { day: String },
    /// Clear every entry for the month
    Reset,
    /// List bank holidays for a year (defaults to the month's year)
    Holidays { year: Option<i32> },
    /// Progress for every month with entries
    History,
    /// Show or update saved settings (usage: config pattern:all percent:60 holidays:off)
    Config {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Import an export of the browser tracker's local storage
    Import { path: PathBuf },
    /// Open the Terminal User Interface
    Tui,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("OFFICEDAY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Stored settings with this run's flags applied on top.
fn effective_settings(cli: &Cli, stored: Settings, fallback: MonthId, today: NaiveDate) -> Result<Settings> {
    let mut settings = stored;
    settings.month = Some(match &cli.month {
        Some(m) => parse_month(m, today)?,
        None => fallback,
    });
    if let Some(pattern) = cli.pattern {
        settings.pattern = pattern;
    }
    if let Some(percent) = cli.percent {
        settings.set_percent(percent)?;
    }
    if cli.no_holidays {
        settings.include_holidays = false;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let status_repo = FileStatusRepository::new(cli.data_dir.clone())?;
    let settings_repo = FileSettingsRepository::new(cli.data_dir.clone())?;
    debug!(dir = %status_repo.base_dir().display(), "using data directory");
    let stored = settings_repo.load()?;

    // Commands work on the current month; the TUI reopens the last viewed one.
    let this_month = MonthId::from_date(today);
    let fallback = match cli.command {
        Some(Commands::Tui) | None => stored.month.unwrap_or(this_month),
        _ => this_month,
    };
    let settings = effective_settings(&cli, stored, fallback, today)?;
    let month = settings.month.unwrap_or(this_month);
    let service = TrackerService::new(status_repo);

    match cli.command {
        Some(Commands::Show { json }) => {
            let report = service.report(month, &settings, today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::print_month(&report, today);
            }
        },
        Some(Commands::Mark { day, status }) => {
            let day = parse_day(&day, month, today)?;
            service.set_day(month, day, status)?;
            println!("{} {}: {}", month.label(), day, status);
            report::print_summary(&service.report(month, &settings, today)?);
        },
        Some(Commands::Cycle { day }) => {
            let day = parse_day(&day, month, today)?;
            match service.cycle_day(month, day, settings.pattern)? {
                Some(status) => {
                    println!("{} {}: {}", month.label(), day, status);
                    report::print_summary(&service.report(month, &settings, today)?);
                },
                None => {
                    println!(
                        "{} {} is not a working day under the {} pattern.",
                        month.label(),
                        day,
                        settings.pattern.description()
                    );
                },
            }
        },
        Some(Commands::Reset) => {
            service.reset_month(month)?;
            println!("Cleared all entries for {}.", month.label());
        },
        Some(Commands::Holidays { year }) => {
            report::print_holidays(year.unwrap_or_else(|| month.year()));
        },
        Some(Commands::History) => {
            let history = HistoryUseCase::new(service.repository()).get_monthly_history(&settings, today)?;
            report::print_history(&history);
        },
        Some(Commands::Config { args }) => {
            let mut stored = settings_repo.load()?;
            if !args.is_empty() {
                let changed = apply_settings_args(&mut stored, &args, today)?;
                settings_repo.save(&stored)?;
                println!("Updated: {}", changed.join(", "));
            }
            report::print_settings(&stored);
        },
        Some(Commands::Import { path }) => {
            let raw = fs::read_to_string(&path)
                .map_err(|e| anyhow!("Could not read {}: {}", path.display(), e))?;
            let imported = ImportService::new(service.repository()).import_browser_export(&raw)?;
            if let Some(browser_settings) = imported.settings {
                settings_repo.save(&browser_settings)?;
                println!("Imported settings: {}", report::describe_settings(&browser_settings));
            }
            println!(
                "Imported {} day(s) across {} month(s); {} legacy label(s) migrated, {} entr(ies) skipped.",
                imported.days,
                imported.months.len(),
                imported.migrated,
                imported.dropped
            );
        },
        Some(Commands::Tui) | None => {
            tui::run(service, settings_repo, stored, settings, today)?;
        },
    }
    Ok(())
}
