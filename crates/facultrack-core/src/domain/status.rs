//! Instructor status labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The availability label shown to students.
///
/// Serialized with the exact display strings ("In Class", "In Meeting", ...).
/// Validation of stored labels belongs to the persistence layer, so any other
/// string is carried through verbatim as `Other` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstructorStatus {
    Available,
    InClass,
    InMeeting,
    Busy,
    Away,
    Unavailable,

    /// A stored label outside the known set.
    Other(String),
}

impl InstructorStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InstructorStatus::Available => "Available",
            InstructorStatus::InClass => "In Class",
            InstructorStatus::InMeeting => "In Meeting",
            InstructorStatus::Busy => "Busy",
            InstructorStatus::Away => "Away",
            InstructorStatus::Unavailable => "Unavailable",
            InstructorStatus::Other(s) => s,
        }
    }

    /// True for a stored label that is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        matches!(self, InstructorStatus::Other(s) if s.trim().is_empty())
    }
}

impl From<String> for InstructorStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => InstructorStatus::Available,
            "In Class" => InstructorStatus::InClass,
            "In Meeting" => InstructorStatus::InMeeting,
            "Busy" => InstructorStatus::Busy,
            "Away" => InstructorStatus::Away,
            "Unavailable" => InstructorStatus::Unavailable,
            _ => InstructorStatus::Other(s),
        }
    }
}

impl From<&str> for InstructorStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<InstructorStatus> for String {
    fn from(status: InstructorStatus) -> Self {
        match status {
            InstructorStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InstructorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
