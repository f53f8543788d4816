//! Line-oriented VEVENT extraction.

use std::borrow::Cow;
use std::io::BufRead;

use crate::error::AgendaResult;
use crate::event::{Event, EventCollection};
use crate::timestamp::Timestamp;

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";
const UNTIL_MARKER: &str = "UNTIL=";

/// Width of a `YYYYMMDDThhmmss` token.
const TOKEN_LEN: usize = 15;

/// Accumulates the properties of the event currently being read.
#[derive(Default)]
struct Extractor {
    current: Option<Event>,
}

impl Extractor {
    /// Feed one line with its terminator already removed. Returns the event
    /// completed by an `END:VEVENT` line.
    fn feed(&mut self, line: &str) -> Option<Event> {
        if line == BEGIN_EVENT {
            self.current = Some(Event::default());
            return None;
        }
        if line == END_EVENT {
            return self.current.take();
        }

        let event = self.current.as_mut()?;

        if let Some(value) = line.strip_prefix("DTSTART:") {
            event.start = Timestamp::new(value);
        } else if let Some(value) = line.strip_prefix("DTEND:") {
            event.end = Timestamp::new(value);
        } else if let Some(value) = line.strip_prefix("LOCATION:") {
            event.location = value.to_string();
        } else if let Some(value) = line.strip_prefix("SUMMARY:") {
            event.summary = value.to_string();
        }

        // The horizon sits inside a larger rule line, e.g. `RRULE:FREQ=WEEKLY;UNTIL=...;BYDAY=MO`
        if let Some(pos) = line.find(UNTIL_MARKER) {
            event.recurrence_until = parse_until(&line[pos + UNTIL_MARKER.len()..]);
            event.recurs = true;
        }

        None
    }
}

fn parse_until(rest: &str) -> Timestamp {
    let value = rest.split(';').next().unwrap_or_default();
    Timestamp::new(value.chars().take(TOKEN_LEN).collect::<String>())
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Read every VEVENT from `reader` into `events`.
///
/// Lines outside an event block and unknown properties are ignored. A line
/// that is not valid UTF-8 is decoded lossily, so only that field is affected.
pub fn read_events<R: BufRead>(mut reader: R, events: &mut EventCollection) -> AgendaResult<()> {
    let mut extractor = Extractor::default();
    let before = events.len();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::warn!(line = line_no, "replacing invalid UTF-8 in calendar line");
        }

        if let Some(event) = extractor.feed(strip_terminator(&line)) {
            events.push(event)?;
        }
    }

    tracing::debug!(count = events.len() - before, "extracted events");
    Ok(())
}

/// Parse ICS content held in memory.
pub fn parse_str(content: &str) -> AgendaResult<EventCollection> {
    let mut events = EventCollection::new();
    read_events(content.as_bytes(), &mut events)?;
    Ok(events)
}
