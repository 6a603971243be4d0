// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Whether a race is still open for betting.
///
/// Status is never stored. It is derived at read time from the
/// advertised start and the instant the read was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaceStatus {
    /// The race has not started yet.
    Open,
    /// The advertised start is at or before the evaluation instant.
    Closed,
}

impl RaceStatus {
    /// Derives the status for a race advertised to start at `advertised_start`,
    /// as seen at `now`.
    ///
    /// A race starting exactly at `now` is already closed.
    #[must_use]
    pub fn at(advertised_start: OffsetDateTime, now: OffsetDateTime) -> Self {
        if advertised_start <= now {
            Self::Closed
        } else {
            Self::Open
        }
    }

    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single race on a meeting card.
///
/// Races are only ever built from store rows; there is no mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    /// Unique identifier of the race.
    pub id: i64,
    /// Identifier of the meeting the race belongs to.
    pub meeting_id: i64,
    /// Official name of the race.
    pub name: String,
    /// Race number within the meeting.
    pub number: i64,
    /// Whether the race is visible to punters.
    pub visible: bool,
    /// Advertised start time, normalized to UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub advertised_start_time: OffsetDateTime,
    /// Derived open/closed status.
    pub status: RaceStatus,
}

/// A sporting event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier of the event.
    pub id: i64,
    /// Name of the event.
    pub name: String,
    /// Where the event takes place.
    pub venue: String,
    /// Whether the event is streamed online.
    pub online: bool,
    /// Advertised start time, normalized to UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub advertised_start_time: OffsetDateTime,
    /// Bonus amount offered on the event.
    pub bonus: u64,
}
