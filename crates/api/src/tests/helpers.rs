// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory repositories that record the filters they are given.

use std::sync::Mutex;

use racing_domain::{Event, EventFilter, Race, RaceFilter, RaceStatus};
use racing_persistence::{EventRepository, PersistenceError, RaceRepository};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_start() -> OffsetDateTime {
    datetime!(2026-03-14 09:30:00 UTC)
}

pub fn create_test_race(id: i64) -> Race {
    Race {
        id,
        meeting_id: id % 3,
        name: format!("Race {id}"),
        number: id,
        visible: id % 2 == 0,
        advertised_start_time: create_test_start(),
        status: RaceStatus::Closed,
    }
}

pub fn create_test_event(id: i64, bonus: u64) -> Event {
    Event {
        id,
        name: format!("Event {id}"),
        venue: String::from("Australia"),
        online: true,
        advertised_start_time: create_test_start(),
        bonus,
    }
}

/// Race repository backed by a fixed list.
#[derive(Debug, Default)]
pub struct FakeRaceRepository {
    pub races: Vec<Race>,
    pub failure: Option<PersistenceError>,
    pub seen_filters: Mutex<Vec<RaceFilter>>,
    pub seen_ids: Mutex<Vec<i64>>,
}

impl FakeRaceRepository {
    pub fn with_races(races: Vec<Race>) -> Self {
        Self {
            races,
            ..Self::default()
        }
    }

    pub fn failing(failure: PersistenceError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn last_filter(&self) -> RaceFilter {
        self.seen_filters
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("list was called")
    }
}

impl RaceRepository for FakeRaceRepository {
    fn init(&self) -> Result<(), PersistenceError> {
        Ok(())
    }

    fn list(&self, filter: &RaceFilter) -> Result<Vec<Race>, PersistenceError> {
        self.seen_filters.lock().unwrap().push(filter.clone());
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        Ok(self.races.clone())
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Race>, PersistenceError> {
        self.seen_ids.lock().unwrap().push(id);
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        Ok(self.races.iter().find(|race| race.id == id).cloned())
    }
}

/// Event repository backed by a fixed list.
#[derive(Debug, Default)]
pub struct FakeEventRepository {
    pub events: Vec<Event>,
    pub failure: Option<PersistenceError>,
    pub seen_filters: Mutex<Vec<EventFilter>>,
}

impl FakeEventRepository {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn failing(failure: PersistenceError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn last_filter(&self) -> EventFilter {
        self.seen_filters
            .lock()
            .unwrap()
            .last()
            .copied()
            .expect("list was called")
    }
}

impl EventRepository for FakeEventRepository {
    fn init(&self) -> Result<(), PersistenceError> {
        Ok(())
    }

    fn list(&self, filter: &EventFilter) -> Result<Vec<Event>, PersistenceError> {
        self.seen_filters.lock().unwrap().push(*filter);
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        Ok(self.events.clone())
    }
}
