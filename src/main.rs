mod cli;
mod config;
mod logging;

use std::fs::File;
use std::io::{BufReader, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use icsagenda_core::timestamp::ClockStyle;
use icsagenda_core::{ics, Agenda, DateRange, EventCollection};
use owo_colors::OwoColorize;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let range = DateRange::new(cli.start, cli.end);

    let mut events = match cli.max_events.or(config.max_events) {
        Some(limit) => EventCollection::with_limit(limit),
        None => EventCollection::new(),
    };

    let file = File::open(&cli.file)
        .with_context(|| format!("Failed to open calendar file '{}'", cli.file.display()))?;
    ics::read_events(BufReader::new(file), &mut events)
        .with_context(|| format!("Failed to read calendar file '{}'", cli.file.display()))?;

    let mut options = config.agenda_options();
    if cli.align_hours {
        options.clock = ClockStyle::Aligned;
    }

    let agenda = Agenda::build(events, options)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(agenda.render(&range).as_bytes())?;
    stdout.flush()?;

    Ok(())
}
