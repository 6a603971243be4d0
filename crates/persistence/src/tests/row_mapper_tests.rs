// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use racing_domain::{Event, Race, RaceStatus};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::PersistenceError;
use crate::queries::rows::{EventRow, RaceRow, map_events, map_races, parse_start_time};

fn race_row(id: i64, advertised_start_time: &str) -> RaceRow {
    RaceRow {
        id,
        meeting_id: 9,
        name: format!("Race {id}"),
        number: 3,
        visible: true,
        advertised_start_time: advertised_start_time.to_string(),
    }
}

fn event_row(id: i64, bonus: i64) -> EventRow {
    EventRow {
        id,
        name: String::from("Harbour City Sharks"),
        venue: String::from("Japan"),
        online: false,
        advertised_start_time: String::from("2026-03-14T09:30:00Z"),
        bonus,
    }
}

#[test]
fn test_zero_rows_map_to_empty_list() {
    let now: OffsetDateTime = datetime!(2026-03-14 12:00:00 UTC);
    assert!(map_races(Vec::new(), now).unwrap().is_empty());
    assert!(map_events(Vec::new()).unwrap().is_empty());
}

#[test]
fn test_status_is_derived_against_one_instant() {
    let now: OffsetDateTime = datetime!(2026-03-14 12:00:00 UTC);
    let rows: Vec<RaceRow> = vec![
        race_row(1, "2026-03-14T11:59:59Z"),
        race_row(2, "2026-03-14T12:00:00Z"),
        race_row(3, "2026-03-14T12:00:01Z"),
    ];

    let races: Vec<Race> = map_races(rows, now).unwrap();
    let statuses: Vec<RaceStatus> = races.iter().map(|race| race.status).collect();
    assert_eq!(
        statuses,
        vec![RaceStatus::Closed, RaceStatus::Closed, RaceStatus::Open]
    );
}

#[test]
fn test_race_fields_are_carried_over() {
    let now: OffsetDateTime = datetime!(2026-03-14 12:00:00 UTC);
    let races: Vec<Race> = map_races(vec![race_row(7, "2026-03-15T08:00:00Z")], now).unwrap();

    assert_eq!(
        races,
        vec![Race {
            id: 7,
            meeting_id: 9,
            name: String::from("Race 7"),
            number: 3,
            visible: true,
            advertised_start_time: datetime!(2026-03-15 08:00:00 UTC),
            status: RaceStatus::Open,
        }]
    );
}

#[test]
fn test_offset_start_times_are_normalized_to_utc() {
    let parsed: OffsetDateTime = parse_start_time("2026-03-14T20:30:00+10:00").unwrap();
    assert_eq!(parsed, datetime!(2026-03-14 10:30:00 UTC));
    assert_eq!(parsed.offset(), time::UtcOffset::UTC);
}

#[test]
fn test_sqlite_datetime_text_is_read_as_utc() {
    let parsed: OffsetDateTime = parse_start_time("2026-03-14 10:30:00").unwrap();
    assert_eq!(parsed, datetime!(2026-03-14 10:30:00 UTC));
}

#[test]
fn test_unparseable_start_time_fails_the_whole_call() {
    let now: OffsetDateTime = datetime!(2026-03-14 12:00:00 UTC);
    let rows: Vec<RaceRow> = vec![
        race_row(1, "2026-03-14T11:00:00Z"),
        race_row(2, "next tuesday"),
    ];

    let err: PersistenceError = map_races(rows, now).unwrap_err();
    match err {
        PersistenceError::DataCorruption { column, value, .. } => {
            assert_eq!(column, "advertised_start_time");
            assert_eq!(value, "next tuesday");
        }
        other => panic!("expected DataCorruption, got {other:?}"),
    }
}

#[test]
fn test_status_boundary_tracks_the_given_instant() {
    let start: OffsetDateTime = datetime!(2026-03-14 12:00:00 UTC);
    let rows = || vec![race_row(1, "2026-03-14T12:00:00Z")];

    let before: Vec<Race> = map_races(rows(), start - Duration::seconds(1)).unwrap();
    let after: Vec<Race> = map_races(rows(), start + Duration::seconds(1)).unwrap();
    assert_eq!(before[0].status, RaceStatus::Open);
    assert_eq!(after[0].status, RaceStatus::Closed);
}

#[test]
fn test_event_fields_are_carried_over() {
    let events: Vec<Event> = map_events(vec![event_row(4, 75)]).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, 4);
    assert_eq!(events[0].bonus, 75);
    assert_eq!(
        events[0].advertised_start_time,
        datetime!(2026-03-14 09:30:00 UTC)
    );
}

#[test]
fn test_negative_bonus_is_data_corruption() {
    let err: PersistenceError = map_events(vec![event_row(1, -5)]).unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::DataCorruption {
            column: "bonus",
            ..
        }
    ));
}
