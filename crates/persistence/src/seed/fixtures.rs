// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixture loaders.
//!
//! The random loaders produce plausible demonstration data: ids `1..=count`,
//! start times spread from one day in the past to two days ahead. The
//! static loaders write exactly the rows they are given.

use diesel::SqliteConnection;
use time::{Duration, OffsetDateTime};
use tracing::info;

use super::FixtureLoader;
use crate::data_models::{NewEvent, NewRace};
use crate::error::PersistenceError;
use crate::mutations::{insert_events, insert_races};

/// Default number of rows a random loader writes.
pub const DEFAULT_FIXTURE_COUNT: i64 = 100;

const PLACES: [&str; 12] = [
    "Flemington",
    "Randwick",
    "Caulfield",
    "Moonee Valley",
    "Eagle Farm",
    "Morphettville",
    "Ascot",
    "Ellerslie",
    "Rosehill",
    "Doomben",
    "Sandown",
    "Warrnambool",
];

const TEAMS: [&str; 12] = [
    "Northern Hawks",
    "Harbour City Sharks",
    "Red Valley Rovers",
    "Southern Comets",
    "Iron Bay Titans",
    "Westside Wolves",
    "Coastal Kings",
    "Granite Falcons",
    "Riverside Rangers",
    "Eastern Storm",
    "Highland Bears",
    "Golden Plains United",
];

const COUNTRIES: [&str; 10] = [
    "Australia",
    "New Zealand",
    "England",
    "Ireland",
    "France",
    "Japan",
    "South Africa",
    "United States",
    "Argentina",
    "Canada",
];

/// Start time drawn uniformly from `[now - 1 day, now + 2 days]`.
fn random_start(now: OffsetDateTime) -> OffsetDateTime {
    now + Duration::seconds(rand::random_range(-86_400..=172_800_i64))
}

fn pick<'a>(values: &[&'a str]) -> &'a str {
    values[rand::random_range(0..values.len())]
}

/// Writes `count` races with random attributes.
#[derive(Debug, Clone, Copy)]
pub struct RandomRaces {
    pub count: i64,
}

impl Default for RandomRaces {
    fn default() -> Self {
        Self {
            count: DEFAULT_FIXTURE_COUNT,
        }
    }
}

impl FixtureLoader for RandomRaces {
    fn load(&self, conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let rows: Vec<NewRace> = (1..=self.count)
            .map(|id| {
                NewRace::scheduled(
                    id,
                    rand::random_range(1..=10_i64),
                    pick(&PLACES),
                    rand::random_range(1..=12_i64),
                    rand::random_bool(0.5),
                    random_start(now),
                )
            })
            .collect::<Result<_, _>>()?;

        let inserted: usize = insert_races(conn, &rows)?;
        info!(count = self.count, inserted = inserted, "Seeded random races");
        Ok(inserted)
    }
}

/// Writes `count` events with random attributes.
#[derive(Debug, Clone, Copy)]
pub struct RandomEvents {
    pub count: i64,
}

impl Default for RandomEvents {
    fn default() -> Self {
        Self {
            count: DEFAULT_FIXTURE_COUNT,
        }
    }
}

impl FixtureLoader for RandomEvents {
    fn load(&self, conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let rows: Vec<NewEvent> = (1..=self.count)
            .map(|id| {
                NewEvent::scheduled(
                    id,
                    pick(&TEAMS),
                    pick(&COUNTRIES),
                    rand::random_bool(0.5),
                    random_start(now),
                    rand::random_range(0..=10_000_i64),
                )
            })
            .collect::<Result<_, _>>()?;

        let inserted: usize = insert_events(conn, &rows)?;
        info!(count = self.count, inserted = inserted, "Seeded random events");
        Ok(inserted)
    }
}

/// Writes a fixed set of races.
#[derive(Debug, Clone, Default)]
pub struct StaticRaces(pub Vec<NewRace>);

impl FixtureLoader for StaticRaces {
    fn load(&self, conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
        insert_races(conn, &self.0)
    }
}

/// Writes a fixed set of events.
#[derive(Debug, Clone, Default)]
pub struct StaticEvents(pub Vec<NewEvent>);

impl FixtureLoader for StaticEvents {
    fn load(&self, conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
        insert_events(conn, &self.0)
    }
}

/// Writes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFixture;

impl FixtureLoader for NoFixture {
    fn load(&self, _conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
        Ok(0)
    }
}
