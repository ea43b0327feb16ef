// Property Calendar
// Prints the classified month grid for the current window

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use property_calendar::models::filters::EventFilters;
use property_calendar::services::bucketing::MonthBuckets;
use property_calendar::services::calendar::{CalendarSession, LoadState};
use property_calendar::services::event_cache::CachedEventSource;
use property_calendar::services::event_source::{EventSource, HttpEventSource, JsonFileEventSource};
use property_calendar::services::settings::SettingsService;
use property_calendar::utils::date::today;

#[derive(Parser)]
#[command(name = "property-calendar")]
#[command(about = "Show classified property reminders for a window of months")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read events from a JSON export instead of the API
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Centre the window on this date (YYYY-MM-DD) instead of today
    #[arg(short, long)]
    date: Option<String>,

    /// Extra months to load before the window
    #[arg(long, default_value_t = 0)]
    behind: u32,

    /// Extra months to load after the window
    #[arg(long, default_value_t = 0)]
    ahead: u32,

    /// Only show events for this property
    #[arg(short, long)]
    property: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let settings = match cli.config {
        Some(ref path) => SettingsService::new(path),
        None => SettingsService::from_default_location()
            .ok_or_else(|| anyhow!("Could not determine a config directory; pass --config"))?,
    };
    let config = settings.get()?;

    let source: Box<dyn EventSource> = match cli.file {
        Some(ref path) => Box::new(JsonFileEventSource::new(path)),
        None => Box::new(HttpEventSource::new(&config)?),
    };
    let source = CachedEventSource::new(source, Duration::from_secs(config.cache_stale_secs));

    let today = today();
    let mut session = CalendarSession::with_config(source, today, &config);
    session.set_filters(EventFilters {
        property_id: cli.property.clone(),
        ..EventFilters::default()
    });

    if let Some(ref date) = cli.date {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid --date {:?}, expected YYYY-MM-DD", date))?;
        session.jump_to(date, today);
    }
    for _ in 0..cli.behind {
        session.expand_backward();
    }
    for _ in 0..cli.ahead {
        session.expand_forward();
    }

    log::info!(
        "Loading calendar for {} to {}",
        session.date_range().start_date,
        session.date_range().end_date
    );

    match session.refresh(today) {
        LoadState::Loaded(months) => {
            for month in months {
                print_month(month);
            }
            Ok(())
        }
        LoadState::Failed(message) => Err(anyhow!("{}", message)),
        LoadState::NotLoaded => Ok(()),
    }
}

fn print_month(month: &MonthBuckets) {
    println!("== {} ({} reminders)", month.month.format("%B %Y"), month.reminder_count());
    for bucket in month.days.iter().filter(|b| b.in_month && !b.is_empty()) {
        println!("  {}", bucket.date.format("%a %e"));
        for reminder in bucket.inline() {
            let time = if reminder.time.is_empty() {
                String::new()
            } else {
                format!(" {}", reminder.time)
            };
            let property = reminder
                .property
                .as_deref()
                .map(|p| format!(" ({})", p))
                .unwrap_or_default();
            println!(
                "    [{}]{} {}{}",
                reminder.reminder_type, time, reminder.title, property
            );
        }
        if let Some(overflow) = bucket.overflow() {
            println!("    {}", overflow.label());
        }
    }
}
