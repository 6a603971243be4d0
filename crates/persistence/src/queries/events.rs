// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event reads.

use diesel::SqliteConnection;
use racing_domain::{Event, EventFilter};
use tracing::debug;

use super::builder::{BoundQuery, build_event_list_query};
use super::rows::{EventRow, map_events};
use crate::error::PersistenceError;

/// Lists events matching `filter`.
///
/// # Errors
///
/// Returns `StoreFailure` if the query fails, `DataCorruption` if a row
/// cannot be mapped.
pub fn list_events(
    conn: &mut SqliteConnection,
    filter: &EventFilter,
) -> Result<Vec<Event>, PersistenceError> {
    let query: BoundQuery = build_event_list_query(filter);
    debug!(sql = %query.sql, binds = query.binds.len(), "Listing events");

    let rows: Vec<EventRow> = query.load(conn)?;
    map_events(rows)
}
