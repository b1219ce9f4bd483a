//! `bookend` CLI — query bookable availability and simulate bookings from the
//! command line, using a JSON busy-event file in place of a live calendar
//! provider.
//!
//! ## Usage
//!
//! ```sh
//! # Bookable slots for one day (events from a file)
//! bookend day --date 2026-03-16 --events calendar.json
//!
//! # Events via stdin
//! cat calendar.json | bookend day --date 2026-03-16
//!
//! # Which days of a month have at least one bookable slot
//! bookend month --year 2026 --month 3 --events calendar.json
//!
//! # Per-day adjacent/all/weekend report over a date range
//! bookend range --start 2026-03-14 --end 2026-03-20 --events calendar.json
//!
//! # Validate and simulate a booking
//! bookend book --start 2026-03-16T13:00:00Z --end 2026-03-16T13:30:00Z \
//!   --name "Ada Lovelace" --email ada@example.com
//! ```

use anyhow::{Context, Result};
use bookend_core::{
    BookingRequest, BusyEvent, ScheduleConfig, Scheduler, StaticProvider,
};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "bookend",
    version,
    about = "Adjacent-slot meeting availability from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone the business window is expressed in
    #[arg(long, global = true, default_value = "America/New_York")]
    timezone: String,

    /// First bookable hour of the day (local wall clock)
    #[arg(long, global = true, default_value_t = 9)]
    start_hour: u32,

    /// End of the bookable range (local wall clock, exclusive)
    #[arg(long, global = true, default_value_t = 17)]
    end_hour: u32,

    /// Slot duration in minutes (must divide 60)
    #[arg(long, global = true, default_value_t = 30)]
    slot_minutes: i64,

    /// Offer weekend days too, instead of short-circuiting them to empty
    #[arg(long, global = true)]
    include_weekends: bool,

    /// JSON file with the calendar's busy events (stdin for queries if omitted)
    #[arg(long, global = true)]
    events: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bookable slots for one date
    Day {
        /// Date to query (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Whether each day of a month has at least one bookable slot
    Month {
        #[arg(long)]
        year: i32,
        /// Month number (1-12)
        #[arg(long)]
        month: u32,
    },
    /// Per-day adjacent/all/weekend availability over a date range
    Range {
        /// First date of the range (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Last date of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: String,
    },
    /// Validate a booking and simulate the calendar insertion
    Book {
        /// Meeting start (RFC 3339, e.g. 2026-03-16T13:00:00Z)
        #[arg(long)]
        start: String,
        /// Meeting end (RFC 3339)
        #[arg(long)]
        end: String,
        /// Booker's name
        #[arg(long)]
        name: String,
        /// Booker's email (invited as attendee)
        #[arg(long)]
        email: String,
        /// Booker's display timezone
        #[arg(long, default_value = "UTC")]
        booker_timezone: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = ScheduleConfig {
        timezone: cli
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone: {}", cli.timezone))?,
        start_hour: cli.start_hour,
        end_hour: cli.end_hour,
        slot_minutes: cli.slot_minutes,
        exclude_weekends: !cli.include_weekends,
    };

    match cli.command {
        Commands::Day { date } => {
            let date = parse_date(&date)?;
            let scheduler = scheduler(config, load_events(cli.events.as_deref(), true)?)?;
            print_json(&scheduler.day_slots(date)?)
        }
        Commands::Month { year, month } => {
            let scheduler = scheduler(config, load_events(cli.events.as_deref(), true)?)?;
            print_json(&scheduler.month_overview(year, month)?)
        }
        Commands::Range { start, end } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let scheduler = scheduler(config, load_events(cli.events.as_deref(), true)?)?;
            print_json(&scheduler.range_availability(start, end)?)
        }
        Commands::Book {
            start,
            end,
            name,
            email,
            booker_timezone,
        } => {
            // Booking needs no event input; never falls back to stdin.
            let scheduler = scheduler(config, load_events(cli.events.as_deref(), false)?)?;
            let request = BookingRequest {
                start_time: parse_instant(&start)?,
                end_time: parse_instant(&end)?,
                name,
                email,
                timezone: booker_timezone,
            };
            print_json(&scheduler.book(&request)?)
        }
    }
}

fn scheduler(
    config: ScheduleConfig,
    events: Vec<BusyEvent>,
) -> Result<Scheduler<StaticProvider>> {
    Scheduler::new(config, StaticProvider::new(events)).context("invalid configuration")
}

/// Load busy events from a JSON file, or stdin when allowed and no file given.
fn load_events(path: Option<&str>, stdin_fallback: bool) -> Result<Vec<BusyEvent>> {
    let content = match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p))?,
        None if stdin_fallback => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading events from stdin")?;
            buf
        }
        None => return Ok(Vec::new()),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content).context("parsing busy-event JSON")
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date: {}", s))
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    s.parse::<DateTime<Utc>>()
        .with_context(|| format!("invalid instant: {}", s))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
