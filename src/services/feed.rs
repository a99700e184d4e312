// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity feed assembly.
//!
//! Handles the core workflow:
//! 1. List the student's club memberships
//! 2. Fetch the aggregate feed and every per-club listing in parallel
//! 3. Degrade each failed fetch to an empty batch (gather-with-default)
//! 4. Reconcile the batches into one canonical snapshot
//!
//! A snapshot is immutable; a refresh builds a brand-new one that replaces
//! the previous snapshot wholesale. Sequencing overlapping refreshes
//! (last-cycle-wins) is the caller's concern — this service keeps no state
//! between invocations.

use std::future::Future;

use chrono::{DateTime, Utc};
use futures_util::future::join_all;

use crate::error::AppError;
use crate::models::{Activity, SourceActivity};
use crate::services::reconcile;
use crate::services::ClubApiClient;

/// Immutable result of one feed load.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    /// Canonical activities, deduplicated and sorted most-recent-first
    pub activities: Vec<Activity>,
    /// When this snapshot was assembled
    pub fetched_at: DateTime<Utc>,
}

/// Outcome of one guarded source fetch.
struct SourceFetch {
    records: Vec<SourceActivity>,
    ok: bool,
}

/// Builds canonical activity snapshots from all contributing sources.
#[derive(Clone)]
pub struct ActivityFeed {
    client: ClubApiClient,
}

impl ActivityFeed {
    pub fn new(client: ClubApiClient) -> Self {
        Self { client }
    }

    /// Load a fresh snapshot.
    ///
    /// Source priority (and therefore field-merge precedence) is fixed:
    /// aggregate feed first, student per-club listings next, leader-scoped
    /// listings last. All fetches run concurrently; a failed source
    /// contributes an empty batch. Only the total failure of every activity
    /// source is an error.
    pub async fn load(&self) -> Result<FeedSnapshot, AppError> {
        // Membership listing only guides the per-club fan-out; losing it
        // reduces coverage to the aggregate feed.
        let club_ids: Vec<i64> = match self.client.my_clubs().await {
            Ok(memberships) => memberships.into_iter().map(|m| m.club.id).collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Membership listing failed, using aggregate feed only");
                Vec::new()
            }
        };

        let primary = guard("aggregate", false, self.client.activities());
        let per_club = join_all(
            club_ids
                .iter()
                .map(|&id| guard("club", false, self.client.club_activities(id))),
        );
        // The leader-scoped listing is rejected for plain students; that
        // failure is routine, not a degradation worth warning about.
        let alternates = join_all(
            club_ids
                .iter()
                .map(|&id| guard("leader", true, self.client.club_activities_alt(id))),
        );

        let (primary, per_club, alternates) = tokio::join!(primary, per_club, alternates);

        let mut fetches = Vec::with_capacity(1 + 2 * club_ids.len());
        fetches.push(primary);
        fetches.extend(per_club);
        fetches.extend(alternates);

        let snapshot = build_snapshot(fetches, Utc::now())?;
        tracing::info!(
            activities = snapshot.activities.len(),
            clubs = club_ids.len(),
            "Activity feed loaded"
        );
        Ok(snapshot)
    }
}

/// Run one source fetch, mapping failure to an empty batch.
async fn guard<F>(source: &'static str, failure_expected: bool, fut: F) -> SourceFetch
where
    F: Future<Output = Result<Vec<SourceActivity>, AppError>>,
{
    match fut.await {
        Ok(records) => SourceFetch { records, ok: true },
        Err(e) => {
            if failure_expected {
                tracing::debug!(source, error = %e, "Activity source unavailable");
            } else {
                tracing::warn!(source, error = %e, "Activity source failed, treating as empty");
            }
            SourceFetch {
                records: Vec::new(),
                ok: false,
            }
        }
    }
}

/// Join settled source fetches into a snapshot.
///
/// Errors only when every source failed; any single success (even an empty
/// one) produces a snapshot.
fn build_snapshot(
    fetches: Vec<SourceFetch>,
    fetched_at: DateTime<Utc>,
) -> Result<FeedSnapshot, AppError> {
    if !fetches.is_empty() && fetches.iter().all(|f| !f.ok) {
        return Err(AppError::AllSourcesFailed);
    }

    let batches: Vec<Vec<SourceActivity>> = fetches.into_iter().map(|f| f.records).collect();

    Ok(FeedSnapshot {
        activities: reconcile::merge_sources(batches),
        fetched_at,
    })
}
