// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! ClubHub core: activity reconciliation and club reporting.
//!
//! This crate is the data layer behind the student club portal's activity
//! views. It merges activity records from several partially-overlapping,
//! partially-unreliable backend sources into one canonical snapshot, and
//! derives per-club report aggregates, filtered views and CSV exports.
//! Rendering, auth and the backend endpoints themselves live elsewhere.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use error::{AppError, Result};
