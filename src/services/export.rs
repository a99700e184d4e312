// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSV export of report data.
//!
//! Output is aimed at spreadsheet consumers: UTF-8 with a byte-order mark
//! (so Excel detects the encoding for non-ASCII club names), CRLF row
//! endings, every field quoted with embedded quotes doubled. Numbers stay
//! plain numerals so the files remain machine-parseable.

use chrono::{DateTime, Utc};

use crate::models::{status, ActivityReportEntry, ClubReport};
use crate::time_utils::date_stamp;

/// Byte-order mark prepended to every export.
const UTF8_BOM: &str = "\u{feff}";

/// Errors from CSV serialization.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

/// Serialize the cross-club aggregate table.
pub fn reports_csv(reports: &[ClubReport]) -> Result<String, ExportError> {
    let mut writer = csv_writer();

    writer.write_record([
        "Club ID",
        "Club Name",
        "Leader",
        "Total Members",
        "Active Members",
        "Total Activities",
        "Total Income",
    ])?;

    for report in reports {
        let leader = report
            .leader
            .as_ref()
            .map(|l| l.name.as_str())
            .unwrap_or("");
        writer.write_record([
            report.club.id.to_string().as_str(),
            report.club.name.as_str(),
            leader,
            report.statistics.total_members.to_string().as_str(),
            report.statistics.active_members.to_string().as_str(),
            report.statistics.total_activities.to_string().as_str(),
            format!("{:.2}", report.statistics.total_income).as_str(),
        ])?;
    }

    finish(writer)
}

/// Serialize one club's filtered activity subset.
///
/// Status codes are rendered through the display-label table; unknown codes
/// appear as-is.
pub fn activities_csv(entries: &[&ActivityReportEntry]) -> Result<String, ExportError> {
    let mut writer = csv_writer();

    writer.write_record([
        "Activity ID",
        "Title",
        "Start Time",
        "Location",
        "Participants",
        "Status",
    ])?;

    for entry in entries {
        writer.write_record([
            entry.activity_id.to_string().as_str(),
            entry.title.as_str(),
            entry.start_time.as_str(),
            entry.location.as_deref().unwrap_or(""),
            entry.participant_count.to_string().as_str(),
            status::label(&entry.status).as_str(),
        ])?;
    }

    finish(writer)
}

/// Filename for the cross-club aggregate export.
pub fn reports_filename(date: DateTime<Utc>) -> String {
    format!("club-reports-{}.csv", date_stamp(date))
}

/// Filename for a club-scoped activity export.
pub fn activities_filename(club_id: i64, date: DateTime<Utc>) -> String {
    format!("club-{}-activities-{}.csv", club_id, date_stamp(date))
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(format!("{}{}", UTF8_BOM, body))
}
