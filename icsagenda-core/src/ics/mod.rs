//! ICS event extraction.
//!
//! Handles the flat subset of RFC 5545 this tool reads: `VEVENT` blocks with
//! unfolded `DTSTART`, `DTEND`, `LOCATION`, `SUMMARY` and `RRULE ... UNTIL=` lines.

mod parse;

pub use parse::{parse_str, read_events};
