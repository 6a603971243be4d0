// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query builder for race and event reads.
//!
//! Every builder is a pure function from a filter to a `BoundQuery`: the
//! query text plus the values bound to its `?` placeholders, in order.
//! Caller-controlled scalars only ever travel as bind values. The one
//! piece of caller input that reaches the text, the `ORDER BY` term,
//! comes from `order_expression`, a closed set.

use diesel::RunQueryDsl;
use diesel::SqliteConnection;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::deserialize::QueryableByName;
use diesel::sql_types::{BigInt, Bool};
use diesel::sqlite::Sqlite;
use racing_domain::{EventFilter, RaceFilter, RaceOrderBy};

/// Select list for races. The row mapper reads these columns by name.
pub const RACE_SELECT: &str =
    "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";

/// Select list for events.
pub const EVENT_SELECT: &str =
    "SELECT id, name, venue, online, advertised_start_time, bonus FROM events";

/// A value bound to a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindValue {
    BigInt(i64),
    Bool(bool),
}

/// Query text together with its bind values, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

impl BoundQuery {
    fn new(base: &str) -> Self {
        Self {
            sql: base.to_string(),
            binds: Vec::new(),
        }
    }

    /// Appends ` WHERE a AND b ...`. No-op for an empty predicate list.
    fn push_where(&mut self, predicates: &[String]) {
        if predicates.is_empty() {
            return;
        }
        self.sql.push_str(" WHERE ");
        self.sql.push_str(&predicates.join(" AND "));
    }

    /// Executes the query, binding every value in order.
    ///
    /// # Errors
    ///
    /// Returns the driver error if preparation, binding or stepping fails.
    pub fn load<T>(&self, conn: &mut SqliteConnection) -> diesel::QueryResult<Vec<T>>
    where
        T: QueryableByName<Sqlite> + 'static,
    {
        let mut query: BoxedSqlQuery<'_, Sqlite, SqlQuery> =
            diesel::sql_query(self.sql.clone()).into_boxed::<Sqlite>();
        for bind in &self.binds {
            query = match *bind {
                BindValue::BigInt(value) => query.bind::<BigInt, _>(value),
                BindValue::Bool(value) => query.bind::<Bool, _>(value),
            };
        }
        query.load::<T>(conn)
    }
}

/// Returns the `ORDER BY` term for `order_by`.
///
/// Start times are stored as text that may carry any UTC offset, so they
/// are sorted by their instant rather than lexically.
#[must_use]
pub const fn order_expression(order_by: RaceOrderBy) -> &'static str {
    match order_by {
        RaceOrderBy::AdvertisedStartTime => "julianday(advertised_start_time)",
        RaceOrderBy::Id
        | RaceOrderBy::Name
        | RaceOrderBy::MeetingId
        | RaceOrderBy::Number
        | RaceOrderBy::Visible => order_by.column(),
    }
}

/// Builds the race list query for `filter`.
///
/// Predicates are emitted in a fixed order: meeting ids, then visibility.
/// An empty meeting id set emits no predicate at all.
#[must_use]
pub fn build_race_list_query(filter: &RaceFilter) -> BoundQuery {
    let mut query: BoundQuery = BoundQuery::new(RACE_SELECT);
    let mut predicates: Vec<String> = Vec::new();

    if !filter.meeting_ids.is_empty() {
        let placeholders: Vec<&str> = vec!["?"; filter.meeting_ids.len()];
        predicates.push(format!("meeting_id IN ({})", placeholders.join(",")));
        query.binds.extend(
            filter
                .meeting_ids
                .iter()
                .map(|meeting_id| BindValue::BigInt(*meeting_id)),
        );
    }

    if filter.visible_only {
        predicates.push(String::from("visible = ?"));
        query.binds.push(BindValue::Bool(true));
    }

    query.push_where(&predicates);

    if let Some(order_by) = filter.order_by {
        query.sql.push_str(" ORDER BY ");
        query.sql.push_str(order_expression(order_by));
        if filter.descending {
            query.sql.push_str(" DESC");
        }
    }

    query
}

/// Builds the single-race lookup query. The id is bound, never inlined.
#[must_use]
pub fn build_race_by_id_query(id: i64) -> BoundQuery {
    let mut query: BoundQuery = BoundQuery::new(RACE_SELECT);
    query.push_where(&[String::from("id = ?")]);
    query.binds.push(BindValue::BigInt(id));
    query
}

/// Builds the event list query for `filter`.
///
/// Predicates are emitted in a fixed order: online flag, then bonus.
/// A zero bonus threshold emits no predicate.
#[must_use]
pub fn build_event_list_query(filter: &EventFilter) -> BoundQuery {
    let mut query: BoundQuery = BoundQuery::new(EVENT_SELECT);
    let mut predicates: Vec<String> = Vec::new();

    if filter.online_only {
        predicates.push(String::from("online = ?"));
        query.binds.push(BindValue::Bool(true));
    }

    if filter.min_bonus > 0 {
        predicates.push(String::from("bonus > ?"));
        // Stored bonuses are i64, so a larger threshold matches nothing either way.
        let threshold: i64 = i64::try_from(filter.min_bonus).unwrap_or(i64::MAX);
        query.binds.push(BindValue::BigInt(threshold));
    }

    query.push_where(&predicates);
    query
}
