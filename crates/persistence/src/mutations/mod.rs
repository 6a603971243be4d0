// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixture writes.
//!
//! The repository layer is read-only toward callers; the only writes are
//! the demonstration rows fixture loaders put in place. Rows carry fixed
//! ids and are written with `INSERT OR IGNORE`, so re-running a load
//! never duplicates anything.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{NewEvent, NewRace};
use crate::diesel_schema::{events, races};
use crate::error::PersistenceError;

/// Inserts race rows that are not already present.
///
/// # Returns
///
/// The number of rows actually inserted.
///
/// # Errors
///
/// Returns an error if the transaction fails. Nothing is written then.
pub fn insert_races(
    conn: &mut SqliteConnection,
    rows: &[NewRace],
) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let mut inserted: usize = 0;
        for row in rows {
            inserted += diesel::insert_or_ignore_into(races::table)
                .values(row)
                .execute(conn)?;
        }
        debug!(requested = rows.len(), inserted = inserted, "Inserted races");
        Ok(inserted)
    })
}

/// Inserts event rows that are not already present.
///
/// # Returns
///
/// The number of rows actually inserted.
///
/// # Errors
///
/// Returns an error if the transaction fails. Nothing is written then.
pub fn insert_events(
    conn: &mut SqliteConnection,
    rows: &[NewEvent],
) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let mut inserted: usize = 0;
        for row in rows {
            inserted += diesel::insert_or_ignore_into(events::table)
                .values(row)
                .execute(conn)?;
        }
        debug!(requested = rows.len(), inserted = inserted, "Inserted events");
        Ok(inserted)
    })
}
