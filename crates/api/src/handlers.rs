// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service handlers.
//!
//! Each handler translates a request DTO into a domain filter, calls the
//! repository and wraps the result in the response DTO. Handlers are
//! synchronous; transports decide where the blocking work runs.

use racing_domain::{Event, EventFilter, Race, RaceFilter, RaceOrderBy, parse_identifier};
use racing_persistence::{EventRepository, RaceRepository};
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    GetRaceByIdRequest, GetRaceByIdResponse, ListEventsRequest, ListEventsResponse,
    ListRacesRequest, ListRacesResponse,
};

/// Read service for races.
#[derive(Debug)]
pub struct RacingService<R> {
    repository: R,
}

impl<R: RaceRepository> RacingService<R> {
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Lists races matching the request filter.
    ///
    /// An absent filter lists every race in store order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::DataCorruption` if a stored row is invalid, or
    /// `ApiError::Internal` if the store fails.
    pub fn list_races(&self, request: ListRacesRequest) -> Result<ListRacesResponse, ApiError> {
        let filter: RaceFilter = request.filter.map(RaceFilter::from).unwrap_or_default();
        debug!(
            meeting_ids = filter.meeting_ids.len(),
            visible_only = filter.visible_only,
            order_by = filter.order_by.as_ref().map(RaceOrderBy::column),
            descending = filter.descending,
            "Listing races"
        );

        let races: Vec<Race> = self.repository.list(&filter).map_err(|e| {
            warn!(error = %e, "Race list failed");
            ApiError::from(e)
        })?;
        info!(count = races.len(), "Listed races");
        Ok(ListRacesResponse { races })
    }

    /// Fetches one race by its textual id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the id is not an integer, or a
    /// store error as for `list_races`. A missing race is not an error.
    pub fn get_race_by_id(
        &self,
        request: &GetRaceByIdRequest,
    ) -> Result<GetRaceByIdResponse, ApiError> {
        let id: i64 = parse_identifier(&request.id).map_err(translate_domain_error)?;
        debug!(id = id, "Fetching race");

        let race: Option<Race> = self.repository.get_by_id(id).map_err(|e| {
            warn!(id = id, error = %e, "Race lookup failed");
            ApiError::from(e)
        })?;
        info!(id = id, found = race.is_some(), "Fetched race");
        Ok(GetRaceByIdResponse { race })
    }
}

/// Read service for sports events.
#[derive(Debug)]
pub struct SportsService<E> {
    repository: E,
}

impl<E: EventRepository> SportsService<E> {
    #[must_use]
    pub const fn new(repository: E) -> Self {
        Self { repository }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &E {
        &self.repository
    }

    /// Lists events matching the request filter.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::DataCorruption` if a stored row is invalid, or
    /// `ApiError::Internal` if the store fails.
    pub fn list_events(&self, request: ListEventsRequest) -> Result<ListEventsResponse, ApiError> {
        let filter: EventFilter = request.filter.map(EventFilter::from).unwrap_or_default();
        debug!(
            online_only = filter.online_only,
            min_bonus = filter.min_bonus,
            "Listing events"
        );

        let events: Vec<Event> = self.repository.list(&filter).map_err(|e| {
            warn!(error = %e, "Event list failed");
            ApiError::from(e)
        })?;
        info!(count = events.len(), "Listed events");
        Ok(ListEventsResponse { events })
    }
}
