// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller-supplied filters narrowing race and event list queries.
//!
//! A default filter means "no constraint, default order". Filters carry
//! only typed values; they never carry query text.

use serde::{Deserialize, Serialize};

/// Columns a race list may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceOrderBy {
    Id,
    Name,
    MeetingId,
    Number,
    Visible,
    AdvertisedStartTime,
}

/// Order-by tokens accepted on the wire, mapped to their variant.
const RACE_ORDER_TOKENS: [(&str, RaceOrderBy); 6] = [
    ("id", RaceOrderBy::Id),
    ("name", RaceOrderBy::Name),
    ("meeting_id", RaceOrderBy::MeetingId),
    ("number", RaceOrderBy::Number),
    ("visible", RaceOrderBy::Visible),
    ("advertised_start_time", RaceOrderBy::AdvertisedStartTime),
];

impl RaceOrderBy {
    /// Resolves a wire token. Unknown tokens resolve to `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        RACE_ORDER_TOKENS
            .iter()
            .find(|(candidate, _)| *candidate == token)
            .map(|(_, order_by)| *order_by)
    }

    /// Returns the column this ordering sorts on.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::MeetingId => "meeting_id",
            Self::Number => "number",
            Self::Visible => "visible",
            Self::AdvertisedStartTime => "advertised_start_time",
        }
    }
}

/// Filter and ordering for a race list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceFilter {
    /// Only races from these meetings. Empty means any meeting.
    #[serde(default)]
    pub meeting_ids: Vec<i64>,
    /// Only visible races.
    #[serde(default)]
    pub visible_only: bool,
    /// Column to order by. `None` keeps the store's default order.
    #[serde(default)]
    pub order_by: Option<RaceOrderBy>,
    /// Sort descending instead of ascending.
    #[serde(default)]
    pub descending: bool,
}

impl RaceFilter {
    /// Sets the ordering from a wire token, dropping tokens that are not
    /// in the allow-list.
    #[must_use]
    pub fn with_order_token(mut self, token: &str, descending: bool) -> Self {
        self.order_by = RaceOrderBy::from_token(token);
        self.descending = descending;
        self
    }

    /// Restricts the list to the given meetings.
    #[must_use]
    pub fn with_meeting_ids(mut self, meeting_ids: Vec<i64>) -> Self {
        self.meeting_ids = meeting_ids;
        self
    }

    /// Restricts the list to visible races.
    #[must_use]
    pub const fn visible_only(mut self) -> Self {
        self.visible_only = true;
        self
    }
}

/// Filter for an event list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Only events streamed online.
    #[serde(default)]
    pub online_only: bool,
    /// Only events whose bonus is strictly greater than this amount.
    /// Zero applies no bonus constraint.
    #[serde(default)]
    pub min_bonus: u64,
}
