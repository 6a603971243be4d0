// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during repository operations.
///
/// The type is `Clone` so a single seeding outcome can be handed to every
/// caller that waited on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Query execution or connection checkout failed.
    StoreFailure(String),
    /// Database connection could not be established.
    ConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// A stored value could not be read back into its typed form.
    DataCorruption {
        /// The column holding the bad value.
        column: &'static str,
        /// The raw stored value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Initialization error.
    InitializationError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreFailure(msg) => write!(f, "Store failure: {msg}"),
            Self::ConnectionFailed(msg) => write!(f, "Database connection failed: {msg}"),
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::DataCorruption {
                column,
                value,
                reason,
            } => write!(
                f,
                "Data corruption in column '{column}' (value '{value}'): {reason}"
            ),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::StoreFailure(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::ConnectionFailed(err.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for PersistenceError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Self::StoreFailure(format!("connection pool: {err}"))
    }
}
