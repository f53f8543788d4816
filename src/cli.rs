use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use icsagenda_core::date_range::parse_date;

#[derive(Parser)]
#[command(name = "icsagenda", version)]
#[command(about = "Print the events of an iCalendar file day by day, expanding weekly recurrences")]
pub struct Cli {
    /// First day to show (YYYY/MM/DD)
    #[arg(long, value_parser = parse_date)]
    pub start: NaiveDate,

    /// Last day to show (YYYY/MM/DD)
    #[arg(long, value_parser = parse_date)]
    pub end: NaiveDate,

    /// Calendar file to read
    #[arg(long)]
    pub file: PathBuf,

    /// Config file to use instead of ~/.config/icsagenda/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Right-align clock hours (" 9:00 AM")
    #[arg(long)]
    pub align_hours: bool,

    /// Fail if the calendar holds more events than this, recurrences included
    #[arg(long)]
    pub max_events: Option<usize>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
