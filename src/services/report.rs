// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report aggregation: cross-club totals, filtered views and summaries.
//!
//! All computation here is synchronous and pure; `now` is a parameter so
//! time-window filtering stays deterministic under test. Fetching lives in
//! [`ReportService`], which degrades a failed bulk endpoint to per-club
//! fetches before giving up.

use chrono::{DateTime, Duration, Utc};
use futures_util::future::join_all;
use serde::Serialize;

use crate::error::AppError;
use crate::models::{status, ActivityReportEntry, ClubReport};
use crate::services::ClubApiClient;
use crate::time_utils::parse_start_time;

/// Time-window filter for report activity views, inclusive lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    All,
    Last30Days,
    Last90Days,
    Last365Days,
}

impl TimeWindow {
    /// Lower bound of the window relative to `now`; `None` means unbounded.
    fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            TimeWindow::All => return None,
            TimeWindow::Last30Days => 30,
            TimeWindow::Last90Days => 90,
            TimeWindow::Last365Days => 365,
        };
        Some(now - Duration::days(days))
    }
}

/// Status-category filter for report activity views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    All,
    /// Open or about to open: active, opened, not-yet-open
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl StatusCategory {
    fn matches(self, raw_status: &str) -> bool {
        let normalized = status::normalize(raw_status);
        match self {
            StatusCategory::All => true,
            StatusCategory::Upcoming => status::UPCOMING.contains(&normalized.as_str()),
            StatusCategory::Ongoing => normalized == "ongoing",
            StatusCategory::Completed => normalized == "completed",
            StatusCategory::Cancelled => normalized == "cancelled",
        }
    }
}

/// Sum of headline statistics across every club report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalAggregate {
    pub total_members: u32,
    pub active_members: u32,
    pub total_activities: u32,
    pub total_income: f64,
}

/// Derived numbers over one filtered activity subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub count: usize,
    pub avg_participants: f64,
    /// Average participants over total club members, as a percentage
    pub participation_rate: f64,
}

/// Sum headline statistics across reports. Empty input is all zeros.
pub fn aggregate(reports: &[ClubReport]) -> GlobalAggregate {
    reports.iter().fold(GlobalAggregate::default(), |acc, r| {
        GlobalAggregate {
            total_members: acc.total_members + r.statistics.total_members,
            active_members: acc.active_members + r.statistics.active_members,
            total_activities: acc.total_activities + r.statistics.total_activities,
            total_income: acc.total_income + r.statistics.total_income,
        }
    })
}

/// Select a club's report activities passing both filters.
///
/// An entry whose `start_time` does not parse is excluded from every window
/// narrower than [`TimeWindow::All`]; a parse fallback must never widen a
/// narrowed view.
pub fn filter_activities<'a>(
    report: &'a ClubReport,
    window: TimeWindow,
    category: StatusCategory,
    now: DateTime<Utc>,
) -> Vec<&'a ActivityReportEntry> {
    let cutoff = window.cutoff(now);

    report
        .activities
        .iter()
        .filter(|entry| match cutoff {
            None => true,
            Some(cutoff) => {
                parse_start_time(&entry.start_time).is_some_and(|start| start >= cutoff)
            }
        })
        .filter(|entry| category.matches(&entry.status))
        .collect()
}

/// Summarize a filtered subset. Empty subsets and memberless clubs yield
/// zeros, never NaN.
pub fn summarize(entries: &[&ActivityReportEntry], total_members: u32) -> ActivitySummary {
    if entries.is_empty() {
        return ActivitySummary {
            count: 0,
            avg_participants: 0.0,
            participation_rate: 0.0,
        };
    }

    let total_participants: u64 = entries.iter().map(|e| u64::from(e.participant_count)).sum();
    let avg_participants = total_participants as f64 / entries.len() as f64;
    let participation_rate = if total_members == 0 {
        0.0
    } else {
        avg_participants / f64::from(total_members) * 100.0
    };

    ActivitySummary {
        count: entries.len(),
        avg_participants,
        participation_rate,
    }
}

/// Fetches club reports from the backend.
#[derive(Clone)]
pub struct ReportService {
    client: ClubApiClient,
}

impl ReportService {
    pub fn new(client: ClubApiClient) -> Self {
        Self { client }
    }

    /// Load reports for all of the user's clubs.
    ///
    /// Prefers the bulk endpoint; if that fails, falls back to fetching each
    /// club's report in parallel and keeps whatever succeeds, so a degraded
    /// backend still yields a partial view.
    pub async fn load_reports(&self) -> Result<Vec<ClubReport>, AppError> {
        match self.client.my_clubs_reports().await {
            Ok(reports) => Ok(reports),
            Err(e) => {
                tracing::warn!(error = %e, "Bulk reports endpoint failed, falling back to per-club fetches");
                self.load_reports_per_club().await
            }
        }
    }

    /// Load the report for one club.
    pub async fn load_report(&self, club_id: i64) -> Result<ClubReport, AppError> {
        self.client.club_report(club_id).await
    }

    async fn load_reports_per_club(&self) -> Result<Vec<ClubReport>, AppError> {
        let memberships = self.client.my_clubs().await?;

        let fetches = join_all(
            memberships
                .iter()
                .map(|m| self.client.club_report(m.club.id)),
        )
        .await;

        let mut reports = Vec::with_capacity(fetches.len());
        for (membership, result) in memberships.iter().zip(fetches) {
            match result {
                Ok(report) => reports.push(report),
                Err(e) => {
                    tracing::warn!(
                        club_id = membership.club.id,
                        error = %e,
                        "Skipping club report"
                    );
                }
            }
        }

        Ok(reports)
    }
}
