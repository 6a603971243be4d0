// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{events, races};
use crate::error::PersistenceError;

/// A race row as written by fixture loaders.
///
/// `advertised_start_time` is the stored text form, RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = races)]
pub struct NewRace {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: String,
}

impl NewRace {
    /// Builds a race row, formatting `advertised_start` as RFC 3339.
    ///
    /// # Errors
    ///
    /// Returns an error if the instant cannot be formatted.
    pub fn scheduled(
        id: i64,
        meeting_id: i64,
        name: &str,
        number: i64,
        visible: bool,
        advertised_start: OffsetDateTime,
    ) -> Result<Self, PersistenceError> {
        Ok(Self {
            id,
            meeting_id,
            name: name.to_string(),
            number,
            visible,
            advertised_start_time: format_start_time(advertised_start)?,
        })
    }
}

/// An event row as written by fixture loaders.
#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = events)]
pub struct NewEvent {
    pub id: i64,
    pub name: String,
    pub venue: String,
    pub online: bool,
    pub advertised_start_time: String,
    pub bonus: i64,
}

impl NewEvent {
    /// Builds an event row, formatting `advertised_start` as RFC 3339.
    ///
    /// # Errors
    ///
    /// Returns an error if the instant cannot be formatted.
    pub fn scheduled(
        id: i64,
        name: &str,
        venue: &str,
        online: bool,
        advertised_start: OffsetDateTime,
        bonus: i64,
    ) -> Result<Self, PersistenceError> {
        Ok(Self {
            id,
            name: name.to_string(),
            venue: venue.to_string(),
            online,
            advertised_start_time: format_start_time(advertised_start)?,
            bonus,
        })
    }
}

fn format_start_time(instant: OffsetDateTime) -> Result<String, PersistenceError> {
    instant.format(&Rfc3339).map_err(|e| {
        PersistenceError::InitializationError(format!("cannot format start time: {e}"))
    })
}
