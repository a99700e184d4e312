//! Per-club report models, produced server-side and read-only here.
//!
//! Reports feed the cross-club aggregates, the filtered activity views and
//! the CSV exports; this crate never writes them back.

use serde::{Deserialize, Serialize};

/// Full report for one club.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubReport {
    /// Club identity and metadata
    pub club: ClubInfo,
    /// Current leader, if one is assigned
    #[serde(default)]
    pub leader: Option<LeaderInfo>,
    /// Headline numbers for the club
    #[serde(default)]
    pub statistics: ReportStatistics,
    /// Per-activity rows backing filtered views and exports
    #[serde(default)]
    pub activities: Vec<ActivityReportEntry>,
}

/// Club identity block inside a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Club leader contact block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Headline statistics for one club.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportStatistics {
    /// Registered members
    pub total_members: u32,
    /// Members active in the reporting period
    pub active_members: u32,
    /// Activities held
    pub total_activities: u32,
    /// Total income, non-negative currency amount
    pub total_income: f64,
}

/// One activity row inside a club report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReportEntry {
    pub activity_id: i64,
    pub title: String,
    /// Start date/time (ISO 8601); unparseable values are conservatively
    /// excluded from narrowed time-window views
    pub start_time: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub participant_count: u32,
    /// Free-form status code, translated to a label only at export time
    pub status: String,
}
