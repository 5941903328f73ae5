//! Resolved status - "right now" view of an instructor.
//!
//! # 状態（毎回再計算、永続化しない）
//! - Overridden: 有効な手動オーバーライドがある
//! - Scheduled: 現在の時間帯に該当するスロットがある
//! - Default: どちらもない（固定の場所で Available）
//!
//! 遷移は壁時計が `overrideExpiresAt` またはスロット境界を越えることだけで起きる。
//! 保存された「現在状態」は存在しない。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::InstructorStatus;

/// Which precedence level produced a [`ResolvedStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusSource {
    Overridden,
    Scheduled,
    #[default]
    Default,
}

/// The effective status, location and room for one instant.
///
/// Derived on every read; stale as soon as the clock crosses a slot boundary or
/// the override expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStatus {
    pub status: InstructorStatus,
    pub location: String,
    pub room: String,

    /// Expiry of the override in effect, `null` when none is.
    pub override_expires_at: Option<DateTime<Utc>>,

    /// Not part of the wire shape.
    #[serde(skip)]
    pub source: StatusSource,
}

impl ResolvedStatus {
    pub fn is_overridden(&self) -> bool {
        self.source == StatusSource::Overridden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_camel_case_without_source() {
        let resolved = ResolvedStatus {
            status: InstructorStatus::InMeeting,
            location: "Science Bldg".to_string(),
            room: "201".to_string(),
            override_expires_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 1, 30, 0).unwrap()),
            source: StatusSource::Overridden,
        };

        let value = serde_json::to_value(&resolved).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "In Meeting",
                "location": "Science Bldg",
                "room": "201",
                "overrideExpiresAt": "2024-01-01T01:30:00Z"
            })
        );
    }

    #[test]
    fn no_override_serializes_null_expiry() {
        let resolved = ResolvedStatus {
            status: InstructorStatus::Available,
            location: String::new(),
            room: String::new(),
            override_expires_at: None,
            source: StatusSource::Default,
        };
        let value = serde_json::to_value(&resolved).unwrap();
        assert!(value["overrideExpiresAt"].is_null());
    }
}
