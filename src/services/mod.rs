// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod client;
pub mod export;
pub mod feed;
pub mod reconcile;
pub mod report;

pub use client::ClubApiClient;
pub use feed::{ActivityFeed, FeedSnapshot};
pub use report::{ActivitySummary, GlobalAggregate, ReportService, StatusCategory, TimeWindow};
