// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod builder_tests;
mod row_mapper_tests;

use diesel::prelude::*;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::diesel_schema::{events, races};
use crate::{NewEvent, NewRace, StorePool};

pub fn create_test_pool() -> StorePool {
    StorePool::new_in_memory().expect("Failed to create in-memory store")
}

/// A fixed instant used wherever a test needs a stored start time.
pub fn create_test_start() -> OffsetDateTime {
    datetime!(2026-03-14 09:30:00 UTC)
}

pub fn create_test_race(id: i64, meeting_id: i64, visible: bool) -> NewRace {
    NewRace::scheduled(
        id,
        meeting_id,
        &format!("Race {id}"),
        id,
        visible,
        create_test_start(),
    )
    .expect("Valid test race")
}

pub fn create_test_event(id: i64, online: bool, bonus: i64) -> NewEvent {
    NewEvent::scheduled(
        id,
        &format!("Event {id}"),
        "Australia",
        online,
        create_test_start(),
        bonus,
    )
    .expect("Valid test event")
}

pub fn count_races(pool: &StorePool) -> i64 {
    let mut conn = pool.get().expect("Connection available");
    races::table
        .count()
        .get_result(&mut *conn)
        .expect("Count races")
}

pub fn count_events(pool: &StorePool) -> i64 {
    let mut conn = pool.get().expect("Connection available");
    events::table
        .count()
        .get_result(&mut *conn)
        .expect("Count events")
}
