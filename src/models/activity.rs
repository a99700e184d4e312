// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity models: raw per-source records and the canonical merged record.

use serde::{Deserialize, Serialize};

use crate::models::status;

/// Activity record as returned by one data source.
///
/// Sources populate different subsets of these fields, so everything is
/// optional. Absent JSON fields decode to `None`; the merge logic relies on
/// that distinction and no field here ever carries a silent default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceActivity {
    /// Activity ID (merge key; records without one are dropped)
    pub id: Option<i64>,
    /// Owning club ID
    pub club_id: Option<i64>,
    /// Activity title
    pub title: Option<String>,
    /// Long description
    pub description: Option<String>,
    /// Start date/time (ISO 8601; required for merge, parsed lazily)
    pub start_time: Option<String>,
    /// End date/time (ISO 8601)
    pub end_time: Option<String>,
    /// Venue
    pub location: Option<String>,
    /// Free-form status string (casing/separators vary by source)
    pub status: Option<String>,
    /// Cover image URL
    pub image_url: Option<String>,
    /// Whether the current student is registered
    pub is_registered: Option<bool>,
    /// Current registration count
    pub registered_count: Option<u32>,
    /// Capacity limit (absent means unlimited)
    pub max_participants: Option<u32>,
    /// Activity category
    pub category: Option<String>,
    /// Owning club name
    pub club_name: Option<String>,
}

/// Canonical activity after merging all sources: exactly one per distinct ID.
///
/// `start_time` stays a raw string; validity is checked where it matters
/// (sorting and time-window filters), not at intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub start_time: String,
    pub club_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub image_url: Option<String>,
    pub is_registered: Option<bool>,
    pub registered_count: Option<u32>,
    pub max_participants: Option<u32>,
    pub category: Option<String>,
    pub club_name: Option<String>,
}

impl Activity {
    /// Build a canonical record from the first source record seen for an ID.
    ///
    /// Returns `None` if the record lacks `id` or `start_time`.
    pub fn from_source(record: SourceActivity) -> Option<Self> {
        Some(Self {
            id: record.id?,
            start_time: record.start_time?,
            club_id: record.club_id,
            title: record.title,
            description: record.description,
            end_time: record.end_time,
            location: record.location,
            status: record.status,
            image_url: record.image_url,
            is_registered: record.is_registered,
            registered_count: record.registered_count,
            max_participants: record.max_participants,
            category: record.category,
            club_name: record.club_name,
        })
    }

    /// Overlay a later source record: defined fields overwrite, absent
    /// fields never erase earlier values.
    pub fn absorb(&mut self, record: SourceActivity) {
        if let Some(start_time) = record.start_time {
            self.start_time = start_time;
        }
        if record.club_id.is_some() {
            self.club_id = record.club_id;
        }
        if record.title.is_some() {
            self.title = record.title;
        }
        if record.description.is_some() {
            self.description = record.description;
        }
        if record.end_time.is_some() {
            self.end_time = record.end_time;
        }
        if record.location.is_some() {
            self.location = record.location;
        }
        if record.status.is_some() {
            self.status = record.status;
        }
        if record.image_url.is_some() {
            self.image_url = record.image_url;
        }
        if record.is_registered.is_some() {
            self.is_registered = record.is_registered;
        }
        if record.registered_count.is_some() {
            self.registered_count = record.registered_count;
        }
        if record.max_participants.is_some() {
            self.max_participants = record.max_participants;
        }
        if record.category.is_some() {
            self.category = record.category;
        }
        if record.club_name.is_some() {
            self.club_name = record.club_name;
        }
    }

    /// Whether the activity has hit its capacity limit.
    ///
    /// Independent of status so the UI can distinguish "closed because full"
    /// from "closed by status". No limit means never full.
    pub fn is_full(&self) -> bool {
        match self.max_participants {
            Some(max) => self.registered_count.unwrap_or(0) >= max,
            None => false,
        }
    }

    /// Whether the current student may register.
    ///
    /// True only for an open status (active/opened), not already registered,
    /// and not full. Every other status (not-yet-open, ongoing, completed,
    /// cancelled, closed, ...) is ineligible regardless of capacity.
    pub fn can_register(&self) -> bool {
        let open = self
            .status
            .as_deref()
            .is_some_and(|s| status::REGISTRABLE.contains(&status::normalize(s).as_str()));

        open && !self.is_registered.unwrap_or(false) && !self.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(status: &str) -> Activity {
        Activity::from_source(SourceActivity {
            id: Some(1),
            start_time: Some("2025-06-01T18:00:00Z".to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_can_register_active_with_room() {
        let mut a = base("Active");
        a.registered_count = Some(3);
        a.max_participants = Some(10);
        assert!(a.can_register());
        assert!(!a.is_full());
    }

    #[test]
    fn test_full_activity_not_registrable_even_when_active() {
        let mut a = base("Active");
        a.registered_count = Some(5);
        a.max_participants = Some(5);
        assert!(a.is_full());
        assert!(!a.can_register());
    }

    #[test]
    fn test_no_capacity_limit_never_full() {
        let mut a = base("opened");
        a.registered_count = Some(5000);
        assert!(!a.is_full());
        assert!(a.can_register());
    }

    #[test]
    fn test_closed_statuses_never_registrable() {
        for s in ["completed", "Cancelled", "ongoing", "closed", "not_yet_open"] {
            let a = base(s);
            assert!(!a.can_register(), "status {s:?} should not be registrable");
        }
    }

    #[test]
    fn test_already_registered_blocks() {
        let mut a = base("active");
        a.is_registered = Some(true);
        assert!(!a.can_register());
    }

    #[test]
    fn test_missing_status_blocks() {
        let mut a = base("active");
        a.status = None;
        assert!(!a.can_register());
    }

    #[test]
    fn test_absorb_none_does_not_erase() {
        let mut a = base("active");
        a.is_registered = Some(true);
        a.absorb(SourceActivity {
            id: Some(1),
            club_name: Some("Lab".to_string()),
            ..Default::default()
        });
        assert_eq!(a.is_registered, Some(true));
        assert_eq!(a.club_name.as_deref(), Some("Lab"));
    }

    #[test]
    fn test_absent_json_fields_decode_to_none() {
        let record: SourceActivity =
            serde_json::from_str(r#"{"id": 9, "startTime": "2025-01-01T00:00Z"}"#).unwrap();
        assert_eq!(record.id, Some(9));
        assert!(record.is_registered.is_none());
        assert!(record.registered_count.is_none());
    }
}
