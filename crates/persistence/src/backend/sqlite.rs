// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-specific backend utilities.
//!
//! This module is limited to:
//! - Connection pool construction
//! - Migration execution
//! - SQLite-specific configuration (PRAGMA statements)
//!
//! Domain queries live in `queries/`, fixture writes in `mutations/`.

use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::{RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::time::Duration;
use tracing::info;

use crate::error::PersistenceError;

/// SQLite migrations creating the `races` and `events` tables.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Pool of Diesel `SQLite` connections.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Per-connection settings applied whenever the pool opens a connection.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Duration,
    /// Whether to switch the database to WAL journaling.
    pub wal: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
        diesel::sql_query(format!(
            "PRAGMA busy_timeout = {}",
            self.busy_timeout.as_millis()
        ))
        .execute(conn)
        .map_err(diesel::r2d2::Error::QueryError)?;

        diesel::sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        if self.wal {
            diesel::sql_query("PRAGMA journal_mode = WAL")
                .execute(conn)
                .map_err(diesel::r2d2::Error::QueryError)?;
        }

        Ok(())
    }
}

/// Run pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Builds a connection pool for `database_url` and brings its schema up to date.
///
/// # Arguments
///
/// * `database_url` - The `SQLite` database URL (`memdb` URI or file path)
/// * `max_connections` - Upper bound on pooled connections
/// * `options` - Settings applied to each new connection
///
/// # Errors
///
/// Returns an error if the pool cannot be built or migrations fail.
pub fn initialize_pool(
    database_url: &str,
    max_connections: u32,
    options: ConnectionOptions,
) -> Result<SqlitePool, PersistenceError> {
    info!(
        database_url = %database_url,
        max_connections = max_connections,
        "Initializing SQLite connection pool"
    );

    let manager: ConnectionManager<SqliteConnection> = ConnectionManager::new(database_url);
    let pool: SqlitePool = Pool::builder()
        .max_size(max_connections)
        .connection_customizer(Box::new(options))
        .build(manager)
        .map_err(|e| PersistenceError::ConnectionFailed(e.to_string()))?;

    let mut conn = pool.get()?;
    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(pool)
}
