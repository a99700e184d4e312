// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club membership models.

use serde::{Deserialize, Serialize};

/// Minimal club reference as returned by the membership listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRef {
    pub id: i64,
    pub name: String,
}

/// One entry of the student's "my clubs" listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub club: ClubRef,
}
