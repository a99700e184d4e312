// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Status-string normalization shared by the activity feed and the reports.
//!
//! Sources disagree on casing and separators (`"Active"`, `"not_yet_open"`,
//! `"NotYetOpen"`). Every status comparison in the crate goes through
//! [`normalize`] so that the feed's eligibility rules and the report filters
//! classify identically.

/// Normalize a free-form status string: lowercase, separators stripped.
///
/// `"Not_Yet-Open"`, `"NotYetOpen"` and `"not yet open"` all normalize to
/// `"notyetopen"`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalized statuses that accept new registrations.
pub const REGISTRABLE: &[&str] = &["active", "opened"];

/// Normalized statuses shown as "upcoming" in filtered report views.
pub const UPCOMING: &[&str] = &["active", "opened", "notyetopen"];

/// Map a status code to its display label for exports.
///
/// Unknown codes pass through unchanged so that new backend states degrade
/// to raw text instead of disappearing.
pub fn label(raw: &str) -> String {
    match normalize(raw).as_str() {
        "active" => "Active",
        "opened" => "Open for Registration",
        "notyetopen" => "Not Yet Open",
        "ongoing" => "Ongoing",
        "inprogress" => "In Progress",
        "completed" => "Completed",
        "finished" => "Finished",
        "cancelled" => "Cancelled",
        "closed" => "Closed",
        "full" => "Full",
        "pending" => "Pending Approval",
        "approved" => "Approved",
        "rejected" => "Rejected",
        "draft" => "Draft",
        "archived" => "Archived",
        _ => return raw.to_string(),
    }
    .to_string()
}
