// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Every field defaults when absent so a bare `{}` body is a valid request.

use racing_domain::{Event, EventFilter, Race, RaceFilter};
use serde::{Deserialize, Serialize};

/// Filter options for listing races.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesRequestFilter {
    /// Only races from these meetings. Empty means any meeting.
    #[serde(default)]
    pub meeting_ids: Vec<i64>,
    /// Only visible races.
    #[serde(default)]
    pub show_visible_only: bool,
    /// Column to order by: `id`, `meeting_id`, `name`, `number`,
    /// `visible` or `advertised_start_time`. Anything else is ignored.
    #[serde(default)]
    pub order_by: Option<String>,
    /// Sort descending.
    #[serde(default)]
    pub is_desc: bool,
}

impl From<ListRacesRequestFilter> for RaceFilter {
    fn from(filter: ListRacesRequestFilter) -> Self {
        let mut race_filter: Self = Self::default().with_meeting_ids(filter.meeting_ids);
        if filter.show_visible_only {
            race_filter = race_filter.visible_only();
        }
        if let Some(token) = filter.order_by.as_deref() {
            race_filter = race_filter.with_order_token(token, filter.is_desc);
        }
        race_filter
    }
}

/// API request to list races.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesRequest {
    /// Optional filter. Absent lists every race.
    #[serde(default)]
    pub filter: Option<ListRacesRequestFilter>,
}

/// API response listing races.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

/// API request to fetch a single race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRaceByIdRequest {
    /// The race identifier, as text.
    pub id: String,
}

/// API response for a single race lookup.
///
/// `race` is `None` when no race has the requested id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRaceByIdResponse {
    pub race: Option<Race>,
}

/// Filter options for listing events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsRequestFilter {
    /// Only events streamed online.
    #[serde(default)]
    pub is_online: bool,
    /// Only events whose bonus exceeds this amount. Zero or negative
    /// applies no bonus constraint.
    #[serde(default)]
    pub bonus_amount: i64,
}

impl From<ListEventsRequestFilter> for EventFilter {
    fn from(filter: ListEventsRequestFilter) -> Self {
        Self {
            online_only: filter.is_online,
            min_bonus: u64::try_from(filter.bonus_amount).unwrap_or(0),
        }
    }
}

/// API request to list events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsRequest {
    /// Optional filter. Absent lists every event.
    #[serde(default)]
    pub filter: Option<ListEventsRequestFilter>,
}

/// API response listing events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}
