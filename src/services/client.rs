// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club backend API client.
//!
//! Thin typed wrapper over the backend REST endpoints this core consumes:
//! the aggregate activity feed, the per-club activity listings (student and
//! leader variants), the membership listing and the club reports. The
//! endpoints themselves are opaque; all response bodies are JSON.

use std::time::Duration;

use serde::Deserialize;

use crate::config::Config;
use crate::error::AppError;
use crate::models::{ClubReport, Membership, SourceActivity};

/// Club backend API client.
#[derive(Clone)]
pub struct ClubApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ClubApiClient {
    /// Create a client from application configuration.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
        }
    }

    /// Create a client against an explicit base URL (tests).
    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Primary aggregate source: every visible activity across clubs.
    pub async fn activities(&self) -> Result<Vec<SourceActivity>, AppError> {
        let url = format!("{}/activities", self.base_url);
        self.get_json(&url).await
    }

    /// Per-club student-facing activity listing.
    pub async fn club_activities(&self, club_id: i64) -> Result<Vec<SourceActivity>, AppError> {
        let url = format!("{}/clubs/{}/activities", self.base_url, club_id);
        self.get_json(&url).await
    }

    /// Per-club leader-scoped activity listing.
    ///
    /// Rejected with 403 for students; callers treat that as a normal empty
    /// outcome, not a fault.
    pub async fn club_activities_alt(&self, club_id: i64) -> Result<Vec<SourceActivity>, AppError> {
        let url = format!("{}/leader/clubs/{}/activities", self.base_url, club_id);
        self.get_json(&url).await
    }

    /// Clubs the current student belongs to.
    pub async fn my_clubs(&self) -> Result<Vec<Membership>, AppError> {
        let url = format!("{}/my/clubs", self.base_url);
        self.get_json(&url).await
    }

    /// Report for a single club.
    pub async fn club_report(&self, club_id: i64) -> Result<ClubReport, AppError> {
        let url = format!("{}/clubs/{}/report", self.base_url, club_id);
        self.get_json(&url).await
    }

    /// Reports for every club the current user leads or belongs to.
    pub async fn my_clubs_reports(&self) -> Result<Vec<ClubReport>, AppError> {
        let url = format!("{}/my/clubs/reports", self.base_url);
        self.get_json(&url).await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, AppError> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let url = response.url().path().to_string();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 404 {
                return Err(AppError::NotFound(url));
            }

            return Err(AppError::Api(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("JSON parse error: {}", e)))
    }
}
