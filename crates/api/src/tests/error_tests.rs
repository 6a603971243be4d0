// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use racing_domain::DomainError;
use racing_persistence::PersistenceError;

use crate::{ApiError, translate_domain_error};

#[test]
fn test_persistence_errors_map_to_api_errors() {
    let corrupt: ApiError = ApiError::from(PersistenceError::DataCorruption {
        column: "bonus",
        value: String::from("-3"),
        reason: String::from("negative bonus"),
    });
    assert!(matches!(corrupt, ApiError::DataCorruption { .. }));

    for err in [
        PersistenceError::StoreFailure(String::from("x")),
        PersistenceError::ConnectionFailed(String::from("x")),
        PersistenceError::MigrationFailed(String::from("x")),
        PersistenceError::InitializationError(String::from("x")),
    ] {
        assert!(matches!(ApiError::from(err), ApiError::Internal { .. }));
    }
}

#[test]
fn test_invalid_identifier_names_the_field() {
    let err: ApiError = translate_domain_error(DomainError::InvalidIdentifier(String::from("abc")));
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'id': 'abc' is not a numeric identifier"
    );
}
