// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates connection pooling, migrations, and PRAGMA
//! configuration from the query and fixture code.

pub mod sqlite;

use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::error::PersistenceError;
use sqlite::{ConnectionOptions, SqlitePool};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `StorePool::new_in_memory()` receives a unique sequential ID,
/// so tests never share a database by accident.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Default number of pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Default busy timeout applied to every connection.
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// A connection checked out of the pool.
pub type PooledSqlite = PooledConnection<ConnectionManager<SqliteConnection>>;

/// The single long-lived store handle shared by the repositories.
///
/// Cloning is cheap and every clone refers to the same pool. The pool is
/// the only concurrency control on reads.
#[derive(Clone)]
pub struct StorePool {
    pool: SqlitePool,
}

impl std::fmt::Debug for StorePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.pool.state();
        f.debug_struct("StorePool")
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish()
    }
}

impl StorePool {
    /// Creates a pool over a fresh in-memory `SQLite` database.
    ///
    /// Pooled connections share one database through the `memdb` VFS,
    /// which locks like a file database: a read that meets the seeding
    /// write waits under `busy_timeout`. The database lives as long as the
    /// pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let memdb_url = format!("file:/racing_memdb_{db_id}?vfs=memdb");

        let pool: SqlitePool = sqlite::initialize_pool(
            &memdb_url,
            DEFAULT_MAX_CONNECTIONS,
            ConnectionOptions {
                busy_timeout: DEFAULT_BUSY_TIMEOUT,
                wal: false,
            },
        )?;

        Ok(Self { pool })
    }

    /// Creates a pool over a file-based `SQLite` database in WAL mode.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    /// * `max_connections` - Upper bound on pooled connections
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(
        path: P,
        max_connections: u32,
    ) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let pool: SqlitePool = sqlite::initialize_pool(
            path_str,
            max_connections.max(1),
            ConnectionOptions {
                busy_timeout: DEFAULT_BUSY_TIMEOUT,
                wal: true,
            },
        )?;

        Ok(Self { pool })
    }

    /// Checks a connection out of the pool.
    ///
    /// # Errors
    ///
    /// Returns `StoreFailure` if no connection becomes available in time.
    pub fn get(&self) -> Result<PooledSqlite, PersistenceError> {
        Ok(self.pool.get()?)
    }
}
