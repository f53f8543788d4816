//! Weekly expansion for recurring events.
//!
//! A recurring event is the seed of a weekly series: every start one, two,
//! three... weeks later becomes its own non-recurring event, for as long as
//! the occurrence date is on or before the seed's UNTIL date.

use crate::error::AgendaResult;
use crate::event::{Event, EventCollection};

/// Expand one recurring seed into its later weekly occurrences.
///
/// The seed itself is NOT included. Time of day plays no part in the
/// horizon check: an occurrence on the UNTIL date is kept whatever its time.
pub fn expand_weekly(seed: &Event) -> AgendaResult<Vec<Event>> {
    if !seed.recurs {
        return Ok(Vec::new());
    }

    let until = seed.recurrence_until.date()?;
    let mut occurrences = Vec::new();

    for weeks in 1.. {
        let start = seed.start.add_weeks(weeks)?;
        if start.date()? > until {
            break;
        }
        let end = seed.end.add_weeks(weeks)?;

        tracing::trace!(summary = %seed.summary, start = %start, "generated occurrence");
        occurrences.push(seed.occurrence(start, end));
    }

    Ok(occurrences)
}

/// Append the weekly occurrences of every recurring event in `events`.
///
/// Only events present before the call act as seeds. A seed with a malformed
/// start, end or UNTIL token is left as a single event. Returns the number of
/// occurrences added.
pub fn expand_all(events: &mut EventCollection) -> AgendaResult<usize> {
    let mut generated = Vec::new();

    for seed in events.iter().filter(|e| e.recurs) {
        match expand_weekly(seed) {
            Ok(occurrences) => generated.extend(occurrences),
            Err(e) => tracing::warn!(summary = %seed.summary, "not expanding recurring event: {}", e),
        }
    }

    let count = generated.len();
    events.extend(generated)?;

    tracing::debug!(count, "expanded recurring events");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgendaError;
    use crate::timestamp::Timestamp;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn weekly(start: &str, end: &str, until: &str) -> Event {
        Event {
            start: Timestamp::from(start),
            end: Timestamp::from(end),
            summary: "Lecture".into(),
            location: "ECS 123".into(),
            recurs: true,
            recurrence_until: Timestamp::from(until),
        }
    }

    fn starts(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.start.as_str()).collect()
    }

    #[test]
    fn series_includes_occurrence_on_until_date() {
        let seed = weekly("20240101T100000", "20240101T110000", "20240115T000000");
        let occurrences = expand_weekly(&seed).unwrap();

        assert_eq!(starts(&occurrences), ["20240108T100000", "20240115T100000"]);
        assert_eq!(occurrences[1].end.as_str(), "20240115T110000");
    }

    #[test]
    fn occurrences_copy_details_and_do_not_recur() {
        let seed = weekly("20240101T100000", "20240101T110000", "20240131T235959");
        for occurrence in expand_weekly(&seed).unwrap() {
            assert!(!occurrence.recurs);
            assert_eq!(occurrence.summary, "Lecture");
            assert_eq!(occurrence.location, "ECS 123");
        }
    }

    #[test]
    fn occurrence_count_is_whole_weeks_to_horizon() {
        // 2024-01-03 .. 2024-03-27 is 84 days
        let seed = weekly("20240103T080000", "20240103T090000", "20240327T000000");
        assert_eq!(expand_weekly(&seed).unwrap().len(), 12);

        let seed = weekly("20240103T080000", "20240103T090000", "20240326T235959");
        assert_eq!(expand_weekly(&seed).unwrap().len(), 11);
    }

    #[test]
    fn horizon_before_first_repeat_generates_nothing() {
        let seed = weekly("20240101T100000", "20240101T110000", "20240107T235959");
        assert!(expand_weekly(&seed).unwrap().is_empty());
    }

    #[test]
    fn non_recurring_event_generates_nothing() {
        let mut seed = weekly("20240101T100000", "20240101T110000", "20240301T000000");
        seed.recurs = false;
        assert!(expand_weekly(&seed).unwrap().is_empty());
    }

    #[test]
    fn malformed_until_is_an_error() {
        let seed = weekly("20240101T100000", "20240101T110000", "soon");
        assert!(matches!(
            expand_weekly(&seed),
            Err(AgendaError::MalformedDateTime(_))
        ));
    }

    #[test]
    fn expand_all_uses_only_existing_seeds() {
        let mut events = EventCollection::from(vec![
            weekly("20240101T100000", "20240101T110000", "20240115T000000"),
            Event {
                start: Timestamp::from("20240102T090000"),
                end: Timestamp::from("20240102T093000"),
                ..Default::default()
            },
        ]);

        assert_eq!(expand_all(&mut events).unwrap(), 2);
        assert_eq!(events.len(), 4);
        assert_eq!(
            starts(events.as_slice()),
            ["20240101T100000", "20240102T090000", "20240108T100000", "20240115T100000"]
        );
    }

    #[test]
    fn expand_all_skips_malformed_seed() {
        let mut events = EventCollection::from(vec![
            weekly("garbage", "20240101T110000", "20240115T000000"),
            weekly("20240101T100000", "20240101T110000", "20240108T000000"),
        ]);

        assert_eq!(expand_all(&mut events).unwrap(), 1);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn expand_all_stops_at_capacity() {
        let mut events = EventCollection::with_limit(3);
        events
            .push(weekly("20240101T100000", "20240101T110000", "20240401T000000"))
            .unwrap();

        assert!(matches!(
            expand_all(&mut events),
            Err(AgendaError::CapacityExceeded { limit: 3 })
        ));
    }

    proptest! {
        #[test]
        fn series_covers_every_whole_week_up_to_horizon(
            start_day in 0i64..20_000,
            gap_days in 0i64..1_500,
            start_hour in 0u32..24,
            until_hour in 0u32..24,
        ) {
            let start_date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(start_day);
            let until_date = start_date + Duration::days(gap_days);
            let start = start_date.and_hms_opt(start_hour, 0, 0).unwrap();
            let until = until_date.and_hms_opt(until_hour, 0, 0).unwrap();

            let seed = Event {
                start: Timestamp::from_date_time(start),
                end: Timestamp::from_date_time(start + Duration::minutes(30)),
                recurs: true,
                recurrence_until: Timestamp::from_date_time(until),
                ..Default::default()
            };
            let occurrences = expand_weekly(&seed).unwrap();

            prop_assert_eq!(occurrences.len() as i64, gap_days / 7);
            for (i, occurrence) in occurrences.iter().enumerate() {
                let date = occurrence.start.date().unwrap();
                prop_assert!(date <= until_date);
                prop_assert_eq!(date, start_date + Duration::weeks(i as i64 + 1));
            }
        }
    }
}
