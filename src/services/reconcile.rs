// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure activity reconciliation: merge, dedup and sort per-source batches.
//!
//! Inputs are the already-fetched record batches in source priority order
//! (primary aggregate feed first, per-club listings next, leader-scoped
//! fallbacks last). The whole pipeline is synchronous and never fails:
//! malformed records are dropped, unparseable dates sort to the end.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Activity, SourceActivity};
use crate::time_utils::parse_start_time;

/// Merge per-source batches into one deduplicated, sorted canonical list.
///
/// Records lacking `id` or `startTime` are discarded. For records sharing an
/// id, fields merge defined-wins in batch order, so a later source's value
/// replaces an earlier one only when the later source actually defines the
/// field. Batch order is a policy choice inherited from the page's fetch
/// order, not a business rule; true cross-source conflicts are rare enough
/// that last-valid-source-wins has been acceptable.
///
/// The result is deterministic for a fixed input, order included.
pub fn merge_sources(batches: Vec<Vec<SourceActivity>>) -> Vec<Activity> {
    let mut merged: Vec<Activity> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for record in batches.into_iter().flatten() {
        let id = match record.id {
            Some(id) if record.start_time.is_some() => id,
            _ => {
                tracing::debug!(id = ?record.id, "Dropping record missing id or startTime");
                continue;
            }
        };

        match index.get(&id) {
            Some(&slot) => merged[slot].absorb(record),
            None => {
                if let Some(activity) = Activity::from_source(record) {
                    index.insert(id, merged.len());
                    merged.push(activity);
                }
            }
        }
    }

    sort_by_start_time_desc(&mut merged);
    merged
}

/// Sort most-recent-first; entries with unparseable dates go to the end,
/// keeping their relative order (stable sort), so the full ordering is a
/// deterministic total order.
fn sort_by_start_time_desc(activities: &mut [Activity]) {
    activities.sort_by(|a, b| {
        match (
            parse_start_time(&a.start_time),
            parse_start_time(&b.start_time),
        ) {
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, start: &str) -> SourceActivity {
        SourceActivity {
            id: Some(id),
            start_time: Some(start.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_records_missing_keys_are_dropped() {
        let no_id = SourceActivity {
            start_time: Some("2025-01-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let no_start = SourceActivity {
            id: Some(7),
            title: Some("orphan".to_string()),
            ..Default::default()
        };

        let merged = merge_sources(vec![vec![no_id, no_start, record(1, "2025-01-01T00:00:00Z")]]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, 1);
    }

    #[test]
    fn test_merge_complements_across_sources() {
        // Registration flag from one source, club name from another,
        // third source empty.
        let mut a = record(1, "2025-01-01T00:00Z");
        a.is_registered = Some(true);
        let mut b = record(1, "2025-01-01T00:00Z");
        b.club_name = Some("Lab".to_string());

        let merged = merge_sources(vec![vec![a], vec![b], vec![]]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, 1);
        assert_eq!(merged[0].start_time, "2025-01-01T00:00Z");
        assert_eq!(merged[0].is_registered, Some(true));
        assert_eq!(merged[0].club_name.as_deref(), Some("Lab"));
    }

    #[test]
    fn test_later_defined_value_wins() {
        let mut a = record(1, "2025-01-01T00:00:00Z");
        a.location = Some("Room 101".to_string());
        let mut b = record(1, "2025-01-01T00:00:00Z");
        b.location = Some("Auditorium".to_string());

        let merged = merge_sources(vec![vec![a], vec![b]]);

        assert_eq!(merged[0].location.as_deref(), Some("Auditorium"));
    }

    #[test]
    fn test_undefined_never_erases_defined() {
        let mut a = record(1, "2025-01-01T00:00:00Z");
        a.is_registered = Some(true);
        let b = record(1, "2025-01-01T00:00:00Z"); // no registration field at all

        let merged = merge_sources(vec![vec![a], vec![b]]);

        assert_eq!(merged[0].is_registered, Some(true));
    }

    #[test]
    fn test_sorted_most_recent_first_with_invalid_last() {
        let merged = merge_sources(vec![vec![
            record(1, "2024-05-01T10:00:00Z"),
            record(2, "garbage"),
            record(3, "2025-05-01T10:00:00Z"),
            record(4, "also-garbage"),
            record(5, "2024-12-01T10:00:00Z"),
        ]]);

        let ids: Vec<i64> = merged.iter().map(|a| a.id).collect();
        // valid dates descending, then the unparseable pair in intake order
        assert_eq!(ids, vec![3, 5, 1, 2, 4]);
    }

    #[test]
    fn test_idempotent_for_fixed_input() {
        let batches = || {
            vec![
                vec![record(1, "2025-02-01T10:00:00Z"), record(2, "bad-date")],
                vec![record(3, "2025-01-01T10:00:00Z"), record(1, "2025-02-01T10:00:00Z")],
            ]
        };

        assert_eq!(merge_sources(batches()), merge_sources(batches()));
    }

    #[test]
    fn test_rerun_over_own_output_is_identity() {
        let first = merge_sources(vec![vec![
            record(1, "2025-02-01T10:00:00Z"),
            record(2, "2025-03-01T10:00:00Z"),
        ]]);

        // Re-express the canonical list as singleton per-id batches.
        let again = merge_sources(vec![first
            .iter()
            .cloned()
            .map(|a| SourceActivity {
                id: Some(a.id),
                club_id: a.club_id,
                title: a.title,
                description: a.description,
                start_time: Some(a.start_time),
                end_time: a.end_time,
                location: a.location,
                status: a.status,
                image_url: a.image_url,
                is_registered: a.is_registered,
                registered_count: a.registered_count,
                max_participants: a.max_participants,
                category: a.category,
                club_name: a.club_name,
            })
            .collect()]);

        assert_eq!(first, again);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(merge_sources(vec![]).is_empty());
        assert!(merge_sources(vec![vec![], vec![], vec![]]).is_empty());
    }
}
