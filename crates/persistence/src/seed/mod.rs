// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-time demonstration data seeding.
//!
//! `SeedGuard` runs a fixture load at most once per guard and hands the
//! same outcome to every caller. A caller that arrives while the load is
//! running blocks until it finishes; it never skips ahead onto a
//! half-populated table. A failed load stays failed for the life of the
//! process. A load that panics records nothing, so the next caller runs it
//! again.

pub mod fixtures;

use diesel::SqliteConnection;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::PersistenceError;

pub use fixtures::{NoFixture, RandomEvents, RandomRaces, StaticEvents, StaticRaces};

/// Loads fixture rows into the store.
pub trait FixtureLoader: Send + Sync {
    /// Writes the fixture rows.
    ///
    /// Must be idempotent: a second load over the same store writes nothing new.
    ///
    /// # Returns
    ///
    /// The number of rows inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows cannot be generated or written.
    fn load(&self, conn: &mut SqliteConnection) -> Result<usize, PersistenceError>;
}

impl<T: FixtureLoader + ?Sized> FixtureLoader for Arc<T> {
    fn load(&self, conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
        (**self).load(conn)
    }
}

/// Observable lifecycle of a `SeedGuard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedState {
    Uninitialized,
    Seeding,
    Ready,
    Failed,
}

/// Holds the `in_progress` flag for the duration of one load.
///
/// Cleared on drop, so a panicking loader does not leave the guard
/// reporting `Seeding`.
struct InProgress<'a>(&'a AtomicBool);

impl<'a> InProgress<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for InProgress<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Run-once coordinator that broadcasts its result.
#[derive(Debug, Default)]
pub struct SeedGuard {
    outcome: OnceLock<Result<usize, PersistenceError>>,
    in_progress: AtomicBool,
}

impl SeedGuard {
    /// Creates a guard that has not run yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
            in_progress: AtomicBool::new(false),
        }
    }

    /// Runs `seed` if no caller has run it yet, otherwise waits for and
    /// returns the first run's outcome.
    ///
    /// # Errors
    ///
    /// Returns a clone of the first run's error, to every caller.
    pub fn run<F>(&self, seed: F) -> Result<usize, PersistenceError>
    where
        F: FnOnce() -> Result<usize, PersistenceError>,
    {
        self.outcome
            .get_or_init(|| {
                let _running: InProgress<'_> = InProgress::enter(&self.in_progress);
                seed()
            })
            .clone()
    }

    /// Returns where the guard is in its lifecycle.
    #[must_use]
    pub fn state(&self) -> SeedState {
        match self.outcome.get() {
            Some(Ok(_)) => SeedState::Ready,
            Some(Err(_)) => SeedState::Failed,
            None if self.in_progress.load(Ordering::SeqCst) => SeedState::Seeding,
            None => SeedState::Uninitialized,
        }
    }
}
