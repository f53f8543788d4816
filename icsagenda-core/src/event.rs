//! Calendar events and the collection that owns them.

use std::fmt;

use crate::error::{AgendaError, AgendaResult};
use crate::timestamp::Timestamp;

/// A single calendar occurrence.
///
/// Fields missing from the input stay at their empty default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub start: Timestamp,
    pub end: Timestamp,
    pub location: String,
    pub summary: String,

    // Recurrence fields
    /// Set when an UNTIL marker was found in the event's block
    pub recurs: bool,
    /// Horizon of the weekly series; only meaningful when `recurs` is set
    pub recurrence_until: Timestamp,
}

impl Event {
    /// A non-recurring copy of this event moved to `start`/`end`.
    pub fn occurrence(&self, start: Timestamp, end: Timestamp) -> Event {
        Event {
            start,
            end,
            location: self.location.clone(),
            summary: self.summary.clone(),
            recurs: false,
            recurrence_until: Timestamp::default(),
        }
    }

    /// True when both times parse and the end lies before the start.
    pub fn is_inverted(&self) -> bool {
        self.start.components().is_ok() && self.end.components().is_ok() && self.end < self.start
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} - {})", self.summary, self.start, self.end)
    }
}

/// Growable, owned sequence of events.
///
/// Insertion order is kept until [`EventCollection::sort`] is called. An
/// optional limit makes growth past a fixed number of events an error.
#[derive(Debug, Clone, Default)]
pub struct EventCollection {
    events: Vec<Event>,
    limit: Option<usize>,
}

impl EventCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        EventCollection {
            events: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn push(&mut self, event: Event) -> AgendaResult<()> {
        if let Some(limit) = self.limit {
            if self.events.len() >= limit {
                return Err(AgendaError::CapacityExceeded { limit });
            }
        }
        self.events.push(event);
        Ok(())
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = Event>) -> AgendaResult<()> {
        events.into_iter().try_for_each(|event| self.push(event))
    }

    /// Drop every event for which `keep` returns false.
    pub fn retain(&mut self, keep: impl FnMut(&Event) -> bool) {
        self.events.retain(keep);
    }

    /// Stable sort by start token; events with equal starts keep their order.
    pub fn sort(&mut self) {
        self.events.sort_by(|a, b| a.start.cmp(&b.start));
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }
}

impl<'a> IntoIterator for &'a EventCollection {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl From<Vec<Event>> for EventCollection {
    fn from(events: Vec<Event>) -> Self {
        EventCollection { events, limit: None }
    }
}
