// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised while interpreting caller-supplied domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A record identifier could not be parsed as an integer.
    #[error("Invalid identifier '{0}': expected an integer")]
    InvalidIdentifier(String),
}

/// Parses a textual record identifier.
///
/// Identifiers arrive as strings on the wire and are bound as integers,
/// so anything that is not a plain integer is rejected here.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdentifier` if `raw` is not an `i64`.
pub fn parse_identifier(raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::InvalidIdentifier(raw.to_string()))
}
