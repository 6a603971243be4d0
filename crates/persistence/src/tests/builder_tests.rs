// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use racing_domain::{EventFilter, RaceFilter, RaceOrderBy};

use crate::queries::builder::{
    BindValue, BoundQuery, EVENT_SELECT, RACE_SELECT, build_event_list_query,
    build_race_by_id_query, build_race_list_query, order_expression,
};

#[test]
fn test_default_race_filter_is_the_base_query() {
    let query: BoundQuery = build_race_list_query(&RaceFilter::default());
    assert_eq!(query.sql, RACE_SELECT);
    assert!(query.binds.is_empty());
}

#[test]
fn test_empty_meeting_ids_emit_no_in_predicate() {
    let filter: RaceFilter = RaceFilter::default().with_meeting_ids(Vec::new());
    let query: BoundQuery = build_race_list_query(&filter);

    assert!(!query.sql.contains(" IN "));
    assert!(!query.sql.contains("IN ()"));
    assert!(!query.sql.contains("WHERE"));
}

#[test]
fn test_meeting_ids_are_bound_one_placeholder_each() {
    let filter: RaceFilter = RaceFilter::default().with_meeting_ids(vec![3, 5, 8]);
    let query: BoundQuery = build_race_list_query(&filter);

    assert_eq!(
        query.sql,
        format!("{RACE_SELECT} WHERE meeting_id IN (?,?,?)")
    );
    assert_eq!(
        query.binds,
        vec![
            BindValue::BigInt(3),
            BindValue::BigInt(5),
            BindValue::BigInt(8)
        ]
    );
}

#[test]
fn test_predicates_are_joined_in_fixed_order() {
    let filter: RaceFilter = RaceFilter::default()
        .visible_only()
        .with_meeting_ids(vec![1, 2]);
    let query: BoundQuery = build_race_list_query(&filter);

    assert_eq!(
        query.sql,
        format!("{RACE_SELECT} WHERE meeting_id IN (?,?) AND visible = ?")
    );
    assert_eq!(
        query.binds,
        vec![
            BindValue::BigInt(1),
            BindValue::BigInt(2),
            BindValue::Bool(true)
        ]
    );
}

#[test]
fn test_same_filter_yields_same_query() {
    let filter: RaceFilter = RaceFilter::default()
        .visible_only()
        .with_meeting_ids(vec![4])
        .with_order_token("number", true);
    assert_eq!(build_race_list_query(&filter), build_race_list_query(&filter));
}

#[test]
fn test_every_order_column_is_appended_last() {
    for order_by in [
        RaceOrderBy::Id,
        RaceOrderBy::Name,
        RaceOrderBy::MeetingId,
        RaceOrderBy::Number,
        RaceOrderBy::Visible,
        RaceOrderBy::AdvertisedStartTime,
    ] {
        let filter: RaceFilter = RaceFilter {
            visible_only: true,
            order_by: Some(order_by),
            ..RaceFilter::default()
        };
        let query: BoundQuery = build_race_list_query(&filter);
        assert_eq!(
            query.sql,
            format!(
                "{RACE_SELECT} WHERE visible = ? ORDER BY {}",
                order_expression(order_by)
            )
        );
    }
}

#[test]
fn test_descending_order() {
    let filter: RaceFilter = RaceFilter::default().with_order_token("advertised_start_time", true);
    let query: BoundQuery = build_race_list_query(&filter);
    assert_eq!(
        query.sql,
        format!("{RACE_SELECT} ORDER BY julianday(advertised_start_time) DESC")
    );
}

#[test]
fn test_plain_columns_order_by_their_name() {
    let filter: RaceFilter = RaceFilter::default().with_order_token("meeting_id", false);
    let query: BoundQuery = build_race_list_query(&filter);
    assert_eq!(query.sql, format!("{RACE_SELECT} ORDER BY meeting_id"));
}

#[test]
fn test_unknown_order_token_emits_no_order_by() {
    for token in ["bonus", "name; DROP TABLE races", "random()", "NAME"] {
        let filter: RaceFilter = RaceFilter::default().with_order_token(token, true);
        let query: BoundQuery = build_race_list_query(&filter);
        assert!(!query.sql.contains("ORDER BY"), "token {token} leaked");
        assert!(!query.sql.contains(token));
    }
}

#[test]
fn test_descending_without_order_by_is_ignored() {
    let filter: RaceFilter = RaceFilter {
        descending: true,
        ..RaceFilter::default()
    };
    let query: BoundQuery = build_race_list_query(&filter);
    assert_eq!(query.sql, RACE_SELECT);
}

#[test]
fn test_race_by_id_binds_the_identifier() {
    let query: BoundQuery = build_race_by_id_query(42);
    assert_eq!(query.sql, format!("{RACE_SELECT} WHERE id = ?"));
    assert_eq!(query.binds, vec![BindValue::BigInt(42)]);
    assert!(!query.sql.contains("42"));
}

#[test]
fn test_default_event_filter_is_the_base_query() {
    let query: BoundQuery = build_event_list_query(&EventFilter::default());
    assert_eq!(query.sql, EVENT_SELECT);
    assert!(query.binds.is_empty());
}

#[test]
fn test_zero_bonus_threshold_emits_no_predicate() {
    let filter: EventFilter = EventFilter {
        online_only: false,
        min_bonus: 0,
    };
    let query: BoundQuery = build_event_list_query(&filter);
    assert!(!query.sql.contains("bonus >"));
}

#[test]
fn test_bonus_threshold_is_bound() {
    let filter: EventFilter = EventFilter {
        online_only: false,
        min_bonus: 50,
    };
    let query: BoundQuery = build_event_list_query(&filter);
    assert_eq!(query.sql, format!("{EVENT_SELECT} WHERE bonus > ?"));
    assert_eq!(query.binds, vec![BindValue::BigInt(50)]);
    assert!(!query.sql.contains("50"));
}

#[test]
fn test_event_predicates_are_joined_in_fixed_order() {
    let filter: EventFilter = EventFilter {
        online_only: true,
        min_bonus: 250,
    };
    let query: BoundQuery = build_event_list_query(&filter);
    assert_eq!(
        query.sql,
        format!("{EVENT_SELECT} WHERE online = ? AND bonus > ?")
    );
    assert_eq!(
        query.binds,
        vec![BindValue::Bool(true), BindValue::BigInt(250)]
    );
}

#[test]
fn test_oversized_bonus_threshold_saturates() {
    let filter: EventFilter = EventFilter {
        online_only: false,
        min_bonus: u64::MAX,
    };
    let query: BoundQuery = build_event_list_query(&filter);
    assert_eq!(query.binds, vec![BindValue::BigInt(i64::MAX)]);
}
