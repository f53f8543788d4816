//! Date range for filtering events.

use chrono::NaiveDate;

use crate::event::Event;
use crate::timestamp::Timestamp;

/// Inclusive range of calendar days.
///
/// A range whose `from` lies after its `to` is valid and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    /// `from` at `T000000`
    pub fn lower_bound(&self) -> Timestamp {
        Timestamp::start_of_day(self.from)
    }

    /// `to` at `T235959`
    pub fn upper_bound(&self) -> Timestamp {
        Timestamp::end_of_day(self.to)
    }

    /// Whether the event starts inside the range, bounds included.
    pub fn contains(&self, event: &Event) -> bool {
        event.start >= self.lower_bound() && event.start <= self.upper_bound()
    }
}

/// Parse a `YYYY/MM/DD` date; month and day may omit their leading zero.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y/%m/%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY/MM/DD", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_at(start: &str) -> Event {
        Event {
            start: Timestamp::from(start),
            ..Default::default()
        }
    }

    fn range(from: &str, to: &str) -> DateRange {
        DateRange::new(parse_date(from).unwrap(), parse_date(to).unwrap())
    }

    fn january() -> DateRange {
        range("2024/01/01", "2024/01/31")
    }

    #[test]
    fn bounds_cover_whole_days() {
        let range = january();
        assert_eq!(range.lower_bound().as_str(), "20240101T000000");
        assert_eq!(range.upper_bound().as_str(), "20240131T235959");
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let range = january();
        assert!(range.contains(&event_at("20240101T000000")));
        assert!(range.contains(&event_at("20240131T235959")));
        assert!(!range.contains(&event_at("20231231T235959")));
        assert!(!range.contains(&event_at("20240201T000000")));
    }

    #[test]
    fn event_without_start_is_outside() {
        assert!(!january().contains(&event_at("")));
    }

    #[test]
    fn accepts_unpadded_fields() {
        assert_eq!(parse_date("2024/1/5").unwrap(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(parse_date("2024/2/9").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 9).unwrap());
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(parse_date("2024-01-01").is_err());
        assert!(parse_date("2024/02/30").is_err());
        assert!(parse_date("01/31/2024").is_err());
    }

    #[test]
    fn single_day_range() {
        let range = range("2024/02/28", "2024/02/28");
        assert!(range.contains(&event_at("20240228T000000")));
        assert!(range.contains(&event_at("20240228T120000")));
        assert!(!range.contains(&event_at("20240229T000000")));
    }

    #[test]
    fn reversed_range_contains_nothing() {
        let range = range("2024/03/01", "2024/02/01");
        assert!(!range.contains(&event_at("20240215T120000")));
        assert!(!range.contains(&event_at("20240301T000000")));
        assert!(!range.contains(&event_at("20240201T235959")));
    }
}
