//! Core types for icsagenda.
//!
//! The pipeline runs in four steps:
//! - `ics` extracts one `Event` per `BEGIN:VEVENT`/`END:VEVENT` block
//! - `recurrence` expands weekly recurring events up to their UNTIL date
//! - `agenda` sorts the collection and selects a `DateRange`
//! - `agenda` renders the selection as text grouped by day

pub mod agenda;
pub mod date_range;
pub mod error;
pub mod event;
pub mod ics;
pub mod recurrence;
pub mod timestamp;

pub use agenda::Agenda;
pub use date_range::DateRange;
pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventCollection};
pub use timestamp::Timestamp;
