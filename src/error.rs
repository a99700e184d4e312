// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Club API error: {0}")]
    Api(String),

    /// Every contributing activity source failed; the only fetch-side
    /// condition that surfaces to the user.
    #[error("All activity sources failed")]
    AllSourcesFailed,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, AppError>;
