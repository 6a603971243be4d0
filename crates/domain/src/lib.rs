// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record types for races and sports events.
//!
//! Everything here is a plain value. Records are materialized by the
//! persistence layer from store rows and handed to callers unchanged.

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

mod error;
mod filter;
mod types;

#[cfg(test)]
mod tests;

pub use error::{DomainError, parse_identifier};
pub use filter::{EventFilter, RaceFilter, RaceOrderBy};
pub use types::{Event, Race, RaceStatus};
