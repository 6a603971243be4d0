// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service layer for the racing and sports read APIs.
//!
//! Request DTOs mirror the wire shapes. Services own a repository and
//! translate between the wire and the domain filters; they never build SQL.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{RacingService, SportsService};
pub use request_response::{
    GetRaceByIdRequest, GetRaceByIdResponse, ListEventsRequest, ListEventsRequestFilter,
    ListEventsResponse, ListRacesRequest, ListRacesRequestFilter, ListRacesResponse,
};
