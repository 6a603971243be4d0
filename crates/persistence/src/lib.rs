// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repository layer for races and sports events.
//!
//! This crate turns structured filters into parameterized SQL, executes it
//! against `SQLite` through Diesel, and rebuilds typed records from the
//! result rows, including the derived race status.
//!
//! ## Layers
//!
//! - `queries::builder` — pure filter-to-query translation. Every
//!   caller-supplied scalar is a bind value; ordering goes through a
//!   closed column set.
//! - `queries::rows` — row structs and the row mapper.
//! - `SqliteRaceRepository` / `SqliteEventRepository` — own a `StorePool`
//!   handle, run the one-time fixture load and dispatch reads.
//!
//! ## Concurrency
//!
//! Reads check a connection out of the pool and hold nothing else. The
//! only cross-call coordination is the `SeedGuard` behind `init`.
//!
//! ## Testing Philosophy
//!
//! - Every test gets its own `memdb` in-memory database
//! - Fixtures are injected, so tests control exactly which rows exist

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use racing_domain::{Event, EventFilter, Race, RaceFilter};
use time::OffsetDateTime;
use tracing::{error, info};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
pub mod queries;
pub mod seed;

#[cfg(test)]
mod tests;

pub use backend::{DEFAULT_MAX_CONNECTIONS, PooledSqlite, StorePool};
pub use data_models::{NewEvent, NewRace};
pub use error::PersistenceError;
pub use seed::{
    FixtureLoader, NoFixture, RandomEvents, RandomRaces, SeedGuard, SeedState, StaticEvents,
    StaticRaces,
};

/// Read access to races.
pub trait RaceRepository: Send + Sync {
    /// Seeds demonstration data, at most once per repository.
    ///
    /// Concurrent callers block until the single load finishes and all
    /// observe its outcome.
    ///
    /// # Errors
    ///
    /// Returns the seeding error, to every caller.
    fn init(&self) -> Result<(), PersistenceError>;

    /// Lists races matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns `StoreFailure` or `DataCorruption`.
    fn list(&self, filter: &RaceFilter) -> Result<Vec<Race>, PersistenceError>;

    /// Retrieves one race by ID. `Ok(None)` when no race has this ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreFailure` or `DataCorruption`.
    fn get_by_id(&self, id: i64) -> Result<Option<Race>, PersistenceError>;
}

/// Read access to sports events.
pub trait EventRepository: Send + Sync {
    /// Seeds demonstration data, at most once per repository.
    ///
    /// # Errors
    ///
    /// Returns the seeding error, to every caller.
    fn init(&self) -> Result<(), PersistenceError>;

    /// Lists events matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns `StoreFailure` or `DataCorruption`.
    fn list(&self, filter: &EventFilter) -> Result<Vec<Event>, PersistenceError>;
}

/// Runs `fixture` behind `guard`, logging the outcome once.
fn seed_once(
    pool: &StorePool,
    guard: &SeedGuard,
    fixture: &dyn FixtureLoader,
    table: &'static str,
) -> Result<(), PersistenceError> {
    guard
        .run(|| {
            info!(table = table, "Seeding fixture data");
            let mut conn: PooledSqlite = pool.get()?;
            let outcome = fixture.load(&mut conn);
            match &outcome {
                Ok(inserted) => info!(table = table, inserted = inserted, "Seeding complete"),
                Err(e) => error!(table = table, error = %e, "Seeding failed"),
            }
            outcome
        })
        .map(|_| ())
}

/// `SQLite`-backed race repository.
pub struct SqliteRaceRepository {
    pool: StorePool,
    seed: SeedGuard,
    fixture: Box<dyn FixtureLoader>,
}

impl std::fmt::Debug for SqliteRaceRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteRaceRepository")
            .field("pool", &self.pool)
            .field("seed", &self.seed.state())
            .finish_non_exhaustive()
    }
}

impl SqliteRaceRepository {
    /// Creates a repository that seeds `RandomRaces::default()` on `init`.
    #[must_use]
    pub fn new(pool: StorePool) -> Self {
        Self::with_fixture(pool, RandomRaces::default())
    }

    /// Creates a repository that seeds `fixture` on `init`.
    #[must_use]
    pub fn with_fixture<F: FixtureLoader + 'static>(pool: StorePool, fixture: F) -> Self {
        Self {
            pool,
            seed: SeedGuard::new(),
            fixture: Box::new(fixture),
        }
    }

    /// Returns where seeding is in its lifecycle.
    #[must_use]
    pub fn seed_state(&self) -> SeedState {
        self.seed.state()
    }
}

impl RaceRepository for SqliteRaceRepository {
    fn init(&self) -> Result<(), PersistenceError> {
        seed_once(&self.pool, &self.seed, self.fixture.as_ref(), "races")
    }

    fn list(&self, filter: &RaceFilter) -> Result<Vec<Race>, PersistenceError> {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let mut conn: PooledSqlite = self.pool.get()?;
        queries::list_races(&mut conn, filter, now)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Race>, PersistenceError> {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let mut conn: PooledSqlite = self.pool.get()?;
        queries::get_race_by_id(&mut conn, id, now)
    }
}

/// `SQLite`-backed event repository.
pub struct SqliteEventRepository {
    pool: StorePool,
    seed: SeedGuard,
    fixture: Box<dyn FixtureLoader>,
}

impl std::fmt::Debug for SqliteEventRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteEventRepository")
            .field("pool", &self.pool)
            .field("seed", &self.seed.state())
            .finish_non_exhaustive()
    }
}

impl SqliteEventRepository {
    /// Creates a repository that seeds `RandomEvents::default()` on `init`.
    #[must_use]
    pub fn new(pool: StorePool) -> Self {
        Self::with_fixture(pool, RandomEvents::default())
    }

    /// Creates a repository that seeds `fixture` on `init`.
    #[must_use]
    pub fn with_fixture<F: FixtureLoader + 'static>(pool: StorePool, fixture: F) -> Self {
        Self {
            pool,
            seed: SeedGuard::new(),
            fixture: Box::new(fixture),
        }
    }

    /// Returns where seeding is in its lifecycle.
    #[must_use]
    pub fn seed_state(&self) -> SeedState {
        self.seed.state()
    }
}

impl EventRepository for SqliteEventRepository {
    fn init(&self) -> Result<(), PersistenceError> {
        seed_once(&self.pool, &self.seed, self.fixture.as_ref(), "events")
    }

    fn list(&self, filter: &EventFilter) -> Result<Vec<Event>, PersistenceError> {
        let mut conn: PooledSqlite = self.pool.get()?;
        queries::list_events(&mut conn, filter)
    }
}
