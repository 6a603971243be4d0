// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `builder` — Filter-to-query translation with bound parameters
//! - `rows` — Row structs and the row mapper
//! - `races` — Race list and lookup
//! - `events` — Event list

pub mod builder;
pub mod events;
pub mod races;
pub mod rows;

pub use events::list_events;
pub use races::{get_race_by_id, list_races};
