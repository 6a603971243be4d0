// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row mapping from raw result rows to typed records.
//!
//! Stored start times are text. RFC 3339 is the canonical form; the bare
//! `YYYY-MM-DD HH:MM:SS` form `SQLite` produces for `CURRENT_TIMESTAMP` is
//! accepted as UTC. Either way the result is normalized to UTC.

use diesel::QueryableByName;
use diesel::sql_types::{BigInt, Bool, Text};
use racing_domain::{Event, Race, RaceStatus};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::PersistenceError;

const SQLITE_DATETIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// A raw race row, in select-list order.
#[derive(Debug, Clone, QueryableByName)]
pub struct RaceRow {
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    #[diesel(sql_type = BigInt)]
    pub meeting_id: i64,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = BigInt)]
    pub number: i64,
    #[diesel(sql_type = Bool)]
    pub visible: bool,
    #[diesel(sql_type = Text)]
    pub advertised_start_time: String,
}

/// A raw event row, in select-list order.
#[derive(Debug, Clone, QueryableByName)]
pub struct EventRow {
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub venue: String,
    #[diesel(sql_type = Bool)]
    pub online: bool,
    #[diesel(sql_type = Text)]
    pub advertised_start_time: String,
    #[diesel(sql_type = BigInt)]
    pub bonus: i64,
}

/// Parses a stored start time into a UTC instant.
///
/// # Errors
///
/// Returns `DataCorruption` if `value` is in neither accepted form.
pub fn parse_start_time(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    if let Ok(instant) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(instant.to_offset(UtcOffset::UTC));
    }

    PrimitiveDateTime::parse(value, SQLITE_DATETIME)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| PersistenceError::DataCorruption {
            column: "advertised_start_time",
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Maps race rows to races, deriving each status against `now`.
///
/// `now` is captured once by the caller so every race in one read is
/// judged against the same instant. One bad row fails the whole call.
///
/// # Errors
///
/// Returns `DataCorruption` if any stored start time cannot be parsed.
pub fn map_races(rows: Vec<RaceRow>, now: OffsetDateTime) -> Result<Vec<Race>, PersistenceError> {
    rows.into_iter()
        .map(|row| {
            let advertised_start_time: OffsetDateTime =
                parse_start_time(&row.advertised_start_time)?;
            Ok(Race {
                id: row.id,
                meeting_id: row.meeting_id,
                name: row.name,
                number: row.number,
                visible: row.visible,
                advertised_start_time,
                status: RaceStatus::at(advertised_start_time, now),
            })
        })
        .collect()
}

/// Maps event rows to events.
///
/// # Errors
///
/// Returns `DataCorruption` if a start time cannot be parsed or a stored
/// bonus is negative.
pub fn map_events(rows: Vec<EventRow>) -> Result<Vec<Event>, PersistenceError> {
    rows.into_iter()
        .map(|row| {
            let advertised_start_time: OffsetDateTime =
                parse_start_time(&row.advertised_start_time)?;
            let bonus: u64 =
                u64::try_from(row.bonus).map_err(|e| PersistenceError::DataCorruption {
                    column: "bonus",
                    value: row.bonus.to_string(),
                    reason: e.to_string(),
                })?;
            Ok(Event {
                id: row.id,
                name: row.name,
                venue: row.venue,
                online: row.online,
                advertised_start_time,
                bonus,
            })
        })
        .collect()
}
