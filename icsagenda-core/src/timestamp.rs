//! Fixed-width `YYYYMMDDThhmmss` date-time tokens.
//!
//! Tokens are kept as the raw text read from the calendar file. Because every
//! field is zero-padded, comparing two tokens as strings gives the same answer
//! as comparing them chronologically, so `Timestamp` orders by its text.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AgendaError, AgendaResult};

/// Length of the date portion (`YYYYMMDD`) of a token.
const DATE_LEN: usize = 8;

/// How the hour of a clock time is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClockStyle {
    /// `9:00 AM`
    #[default]
    Compact,
    /// ` 9:00 AM`, hour right-aligned to two columns
    Aligned,
}

/// A date-time token such as `20240115T090000`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(token: impl Into<String>) -> Self {
        Timestamp(token.into())
    }

    pub fn from_date_time(dt: NaiveDateTime) -> Self {
        Timestamp(dt.format("%Y%m%dT%H%M%S").to_string())
    }

    /// First second of `date` (`T000000`)
    pub fn start_of_day(date: NaiveDate) -> Self {
        Timestamp(format!("{}T000000", date.format("%Y%m%d")))
    }

    /// Last second of `date` (`T235959`)
    pub fn end_of_day(date: NaiveDate) -> Self {
        Timestamp(format!("{}T235959", date.format("%Y%m%d")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split the token into `(year, month, day, hour, minute)`.
    ///
    /// Only checks that the fields are numeric; calendar validity is checked
    /// by [`Timestamp::date`] and [`Timestamp::format_clock`].
    pub fn components(&self) -> AgendaResult<(i32, u32, u32, u32, u32)> {
        if self.0.as_bytes().get(DATE_LEN) != Some(&b'T') {
            return Err(self.malformed());
        }

        let year = self.field(0..4)?;
        let month = self.field(4..6)?;
        let day = self.field(6..8)?;
        let hour = self.field(9..11)?;
        let minute = self.field(11..13)?;

        Ok((year as i32, month, day, hour, minute))
    }

    /// Calendar date of the token. Anything after the date portion is ignored.
    pub fn date(&self) -> AgendaResult<NaiveDate> {
        let year = self.field(0..4)?;
        let month = self.field(4..6)?;
        let day = self.field(6..8)?;

        NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| self.malformed())
    }

    /// Shift the date by `weeks * 7` days, keeping the time-of-day suffix verbatim.
    pub fn add_weeks(&self, weeks: i64) -> AgendaResult<Timestamp> {
        let date = self.date()?;
        let shifted = Duration::try_weeks(weeks)
            .and_then(|delta| date.checked_add_signed(delta))
            .ok_or_else(|| self.malformed())?;

        let suffix = &self.0[DATE_LEN..];
        Ok(Timestamp(format!("{}{}", shifted.format("%Y%m%d"), suffix)))
    }

    /// Day header block: `January 15, 2024 (Mon)`, a dashed divider of the
    /// same width, each followed by a newline.
    pub fn format_day_header(&self) -> AgendaResult<String> {
        let label = self.date()?.format("%B %d, %Y (%a)").to_string();
        let divider = "-".repeat(label.chars().count());
        Ok(format!("{}\n{}\n", label, divider))
    }

    /// 12-hour clock time, e.g. `9:00 AM` or `12:30 PM`.
    pub fn format_clock(&self, style: ClockStyle) -> AgendaResult<String> {
        let (_, _, _, hour, minute) = self.components()?;
        NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| self.malformed())?;

        let meridiem = if hour >= 12 { "PM" } else { "AM" };
        let hour = match hour {
            0 => 12,
            13.. => hour - 12,
            _ => hour,
        };

        Ok(match style {
            ClockStyle::Compact => format!("{}:{:02} {}", hour, minute, meridiem),
            ClockStyle::Aligned => format!("{:>2}:{:02} {}", hour, minute, meridiem),
        })
    }

    fn field(&self, range: std::ops::Range<usize>) -> AgendaResult<u32> {
        let text = self.0.get(range).ok_or_else(|| self.malformed())?;
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.malformed());
        }
        text.parse().map_err(|_| self.malformed())
    }

    fn malformed(&self) -> AgendaError {
        AgendaError::MalformedDateTime(self.0.clone())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timestamp {
    fn from(token: &str) -> Self {
        Timestamp::new(token)
    }
}
