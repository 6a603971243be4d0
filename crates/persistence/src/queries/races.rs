// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Race reads.

use diesel::SqliteConnection;
use racing_domain::{Race, RaceFilter};
use time::OffsetDateTime;
use tracing::debug;

use super::builder::{BoundQuery, build_race_by_id_query, build_race_list_query};
use super::rows::{RaceRow, map_races};
use crate::error::PersistenceError;

/// Lists races matching `filter`, with status evaluated at `now`.
///
/// # Errors
///
/// Returns `StoreFailure` if the query fails, `DataCorruption` if a row
/// cannot be mapped.
pub fn list_races(
    conn: &mut SqliteConnection,
    filter: &RaceFilter,
    now: OffsetDateTime,
) -> Result<Vec<Race>, PersistenceError> {
    let query: BoundQuery = build_race_list_query(filter);
    debug!(sql = %query.sql, binds = query.binds.len(), "Listing races");

    let rows: Vec<RaceRow> = query.load(conn)?;
    map_races(rows, now)
}

/// Retrieves one race by ID.
///
/// # Errors
///
/// Returns `StoreFailure` if the query fails, `DataCorruption` if the row
/// cannot be mapped. Returns `Ok(None)` if no race has this ID.
pub fn get_race_by_id(
    conn: &mut SqliteConnection,
    id: i64,
    now: OffsetDateTime,
) -> Result<Option<Race>, PersistenceError> {
    let query: BoundQuery = build_race_by_id_query(id);
    debug!(race_id = id, "Looking up race by ID");

    let rows: Vec<RaceRow> = query.load(conn)?;
    Ok(map_races(rows, now)?.into_iter().next())
}
