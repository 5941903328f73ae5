//! Instructor record as read from the document store, and the public view
//! returned to students.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::InstructorId;
use super::schedule::ScheduleEntry;
use super::state::ResolvedStatus;
use super::status::InstructorStatus;

/// The stored instructor document (the fields this crate reads or updates).
///
/// Owned by the persistence layer; the resolver only borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorRecord {
    pub id: InstructorId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    /// Weekly timetable in stored order. Order only matters when slots overlap.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,

    /// Static location used when no slot is current.
    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub room: String,

    #[serde(default)]
    pub override_status: Option<InstructorStatus>,

    /// The override is in effect only while this lies strictly in the future.
    #[serde(default)]
    pub override_expires_at: Option<DateTime<Utc>>,
}

impl InstructorRecord {
    pub fn new(id: impl Into<InstructorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            schedule: Vec::new(),
            location: String::new(),
            room: String::new(),
            override_status: None,
            override_expires_at: None,
        }
    }

    pub fn with_schedule(mut self, schedule: Vec<ScheduleEntry>) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>, room: impl Into<String>) -> Self {
        self.location = location.into();
        self.room = room.into();
        self
    }

    pub fn with_override(mut self, status: InstructorStatus, expires_at: DateTime<Utc>) -> Self {
        self.override_status = Some(status);
        self.override_expires_at = Some(expires_at);
        self
    }

    /// Strict comparison: an override expiring exactly at `now` is already over.
    pub fn override_active_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.override_expires_at, Some(expires_at) if expires_at > now)
    }
}

/// Public profile of an instructor with its resolved `currentStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorView {
    pub id: InstructorId,
    pub name: String,
    pub email: String,
    pub schedule: Vec<ScheduleEntry>,
    pub location: String,
    pub room: String,
    pub current_status: ResolvedStatus,
}

impl InstructorView {
    pub fn new(record: &InstructorRecord, current_status: ResolvedStatus) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            schedule: record.schedule.clone(),
            location: record.location.clone(),
            room: record.room.clone(),
            current_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn minimal_document_deserializes_with_defaults() {
        let record: InstructorRecord = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(record.id.as_str(), "abc");
        assert!(record.schedule.is_empty());
        assert_eq!(record.location, "");
        assert_eq!(record.override_status, None);
        assert_eq!(record.override_expires_at, None);
    }

    #[test]
    fn override_fields_use_camel_case() {
        let json = r#"{
            "id": "abc",
            "name": "Dr. Reyes",
            "overrideStatus": "Busy",
            "overrideExpiresAt": "2024-01-01T02:00:00Z"
        }"#;
        let record: InstructorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.override_status, Some(InstructorStatus::Busy));
        assert_eq!(
            record.override_expires_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap())
        );
    }

    #[test]
    fn override_expiring_now_is_not_active() {
        let expiry = Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap();
        let record =
            InstructorRecord::new("abc", "Dr. Reyes").with_override(InstructorStatus::Away, expiry);

        assert!(record.override_active_at(expiry - chrono::Duration::seconds(1)));
        assert!(!record.override_active_at(expiry));
        assert!(!record.override_active_at(expiry + chrono::Duration::seconds(1)));
    }
}
