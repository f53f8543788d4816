//! Chronological agenda built from an event collection.
//!
//! Rendering groups events by the day they start on:
//!
//! ```text
//! January 15, 2024 (Mon)
//! ----------------------
//! 9:00 AM to 10:00 AM: Standup {{Room1}}
//!
//! January 16, 2024 (Tue)
//! ----------------------
//! 2:00 PM to 3:00 PM: Review {{}}
//! ```

use chrono::NaiveDate;

use crate::date_range::DateRange;
use crate::error::AgendaResult;
use crate::event::{Event, EventCollection};
use crate::recurrence;
use crate::timestamp::ClockStyle;

/// Options that shape how an agenda is built and printed.
#[derive(Debug, Clone, Copy)]
pub struct AgendaOptions {
    pub clock: ClockStyle,
    /// Drop events whose end lies before their start
    pub reject_inverted: bool,
}

impl Default for AgendaOptions {
    fn default() -> Self {
        AgendaOptions {
            clock: ClockStyle::Compact,
            reject_inverted: true,
        }
    }
}

/// All events of a calendar, recurring series expanded, in start order.
#[derive(Debug, Clone)]
pub struct Agenda {
    events: EventCollection,
    options: AgendaOptions,
}

impl Agenda {
    /// Expand recurring events and sort everything by start.
    ///
    /// Fails only when expansion grows the collection past its limit.
    pub fn build(mut events: EventCollection, options: AgendaOptions) -> AgendaResult<Self> {
        if options.reject_inverted {
            events.retain(|event| {
                let inverted = event.is_inverted();
                if inverted {
                    tracing::warn!(%event, "dropping event that ends before it starts");
                }
                !inverted
            });
        }

        recurrence::expand_all(&mut events)?;
        events.sort();

        Ok(Agenda { events, options })
    }

    pub fn events(&self) -> &[Event] {
        self.events.as_slice()
    }

    /// Events starting inside `range`, in start order.
    pub fn in_range<'a>(&'a self, range: &'a DateRange) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |event| range.contains(event))
    }

    /// Agenda text for every event starting inside `range`. Empty when
    /// there are none.
    pub fn render(&self, range: &DateRange) -> String {
        let (output, count) = render_counted(self.in_range(range), self.options.clock);
        tracing::debug!(from = %range.from, to = %range.to, count, "rendered agenda");
        output
    }

    /// Header and event lines for a single day, or `None` if nothing starts that day.
    pub fn events_for_day(&self, date: NaiveDate) -> Option<String> {
        let day = self
            .events
            .iter()
            .filter(|event| event.start.date().is_ok_and(|d| d == date));

        let output = render_events(day, self.options.clock);
        (!output.is_empty()).then_some(output)
    }
}

/// Render already ordered events, printing a day header whenever the day changes.
///
/// An event whose times cannot be formatted is left out and logged.
pub fn render_events<'a>(events: impl IntoIterator<Item = &'a Event>, clock: ClockStyle) -> String {
    render_counted(events, clock).0
}

/// Rendered text plus the number of event lines in it.
fn render_counted<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    clock: ClockStyle,
) -> (String, usize) {
    let mut output = String::new();
    let mut current_header: Option<String> = None;
    let mut count = 0;

    for event in events {
        let (header, line) = match event
            .start
            .format_day_header()
            .and_then(|header| Ok((header, format_line(event, clock)?)))
        {
            Ok(parts) => parts,
            Err(e) => {
                tracing::warn!(%event, "skipping event: {}", e);
                continue;
            }
        };

        if current_header.as_ref() != Some(&header) {
            if current_header.is_some() {
                output.push('\n');
            }
            output.push_str(&header);
            current_header = Some(header);
        }

        output.push_str(&line);
        output.push('\n');
        count += 1;
    }

    (output, count)
}

/// `9:00 AM to 10:00 AM: Standup {{Room1}}`
fn format_line(event: &Event, clock: ClockStyle) -> AgendaResult<String> {
    Ok(format!(
        "{} to {}: {} {{{{{}}}}}",
        event.start.format_clock(clock)?,
        event.end.format_clock(clock)?,
        event.summary,
        event.location
    ))
}
