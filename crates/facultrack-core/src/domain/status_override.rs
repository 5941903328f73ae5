//! Manual status overrides set by an instructor for a bounded time.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::OverrideError;
use super::instructor::InstructorRecord;
use super::schedule::TimeOfDay;
use super::status::InstructorStatus;

/// How long an override lasts, as offered by the instructor dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OverrideDuration {
    ThirtyMinutes,
    OneHour,
    TwoHours,
    /// Until the configured end of the working day, today.
    EndOfDay,
    /// Drop any override now.
    Clear,
}

impl OverrideDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverrideDuration::ThirtyMinutes => "30m",
            OverrideDuration::OneHour => "1h",
            OverrideDuration::TwoHours => "2h",
            OverrideDuration::EndOfDay => "eod",
            OverrideDuration::Clear => "clear",
        }
    }

    /// Expiry for an override placed at `now`.
    ///
    /// `EndOfDay` is today's `end_of_day` in `timezone`; placed after that time
    /// it is already in the past and the override never takes effect.
    pub fn expires_at(
        &self,
        now: DateTime<Utc>,
        timezone: FixedOffset,
        end_of_day: TimeOfDay,
    ) -> Option<DateTime<Utc>> {
        match self {
            OverrideDuration::ThirtyMinutes => Some(now + Duration::minutes(30)),
            OverrideDuration::OneHour => Some(now + Duration::hours(1)),
            OverrideDuration::TwoHours => Some(now + Duration::hours(2)),
            OverrideDuration::EndOfDay => {
                let local_date = now.with_timezone(&timezone).date_naive();
                let local_eod = local_date.and_time(end_of_day.to_naive_time());
                let offset = Duration::seconds(i64::from(timezone.local_minus_utc()));
                Some((local_eod - offset).and_utc())
            }
            OverrideDuration::Clear => None,
        }
    }
}

impl FromStr for OverrideDuration {
    type Err = OverrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "30m" => Ok(OverrideDuration::ThirtyMinutes),
            "1h" => Ok(OverrideDuration::OneHour),
            "2h" => Ok(OverrideDuration::TwoHours),
            "eod" => Ok(OverrideDuration::EndOfDay),
            "clear" => Ok(OverrideDuration::Clear),
            other => Err(OverrideError::InvalidDuration(other.to_string())),
        }
    }
}

impl TryFrom<String> for OverrideDuration {
    type Error = OverrideError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OverrideDuration> for String {
    fn from(d: OverrideDuration) -> Self {
        d.as_str().to_string()
    }
}

impl fmt::Display for OverrideDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated override request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOverride {
    status: InstructorStatus,
    duration: OverrideDuration,
}

impl StatusOverride {
    /// `status` may be omitted only for `Clear`, which always stores "Available".
    pub fn new(
        status: Option<InstructorStatus>,
        duration: OverrideDuration,
    ) -> Result<Self, OverrideError> {
        let status = match (duration, status) {
            (OverrideDuration::Clear, _) => InstructorStatus::Available,
            (_, Some(status)) => status,
            (_, None) => return Err(OverrideError::MissingStatus),
        };
        Ok(Self { status, duration })
    }

    pub fn clear() -> Self {
        Self {
            status: InstructorStatus::Available,
            duration: OverrideDuration::Clear,
        }
    }

    pub fn status(&self) -> &InstructorStatus {
        &self.status
    }

    pub fn duration(&self) -> OverrideDuration {
        self.duration
    }

    /// Writes the override fields of `record`. Schedule and location are untouched.
    pub fn apply(
        &self,
        record: &mut InstructorRecord,
        now: DateTime<Utc>,
        timezone: FixedOffset,
        end_of_day: TimeOfDay,
    ) {
        record.override_status = Some(self.status.clone());
        record.override_expires_at = self.duration.expires_at(now, timezone, end_of_day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn manila() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    fn five_pm() -> TimeOfDay {
        TimeOfDay::new(17, 0).unwrap()
    }

    // 2024-01-01 is a Monday; 01:00 UTC is 09:00 in UTC+8.
    fn monday_9am() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap()
    }

    #[rstest]
    #[case::thirty_minutes("30m", Duration::minutes(30))]
    #[case::one_hour("1h", Duration::hours(1))]
    #[case::two_hours("2h", Duration::hours(2))]
    fn relative_durations_add_to_now(#[case] input: &str, #[case] delta: Duration) {
        let duration: OverrideDuration = input.parse().unwrap();
        let expiry = duration.expires_at(monday_9am(), manila(), five_pm());
        assert_eq!(expiry, Some(monday_9am() + delta));
    }

    #[test]
    fn end_of_day_is_local_five_pm() {
        let expiry = OverrideDuration::EndOfDay.expires_at(monday_9am(), manila(), five_pm());
        // 17:00 UTC+8 == 09:00 UTC
        assert_eq!(expiry, Some(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()));
    }

    #[test]
    fn end_of_day_uses_local_date_not_utc_date() {
        // 2024-01-01 20:00 UTC is already 2024-01-02 04:00 in UTC+8.
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();
        let expiry = OverrideDuration::EndOfDay.expires_at(now, manila(), five_pm());
        assert_eq!(expiry, Some(Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap()));
    }

    #[test]
    fn end_of_day_after_five_is_already_expired() {
        // 18:00 local
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let expiry = OverrideDuration::EndOfDay
            .expires_at(now, manila(), five_pm())
            .unwrap();
        assert!(expiry < now);
    }

    #[test]
    fn clear_has_no_expiry() {
        assert_eq!(OverrideDuration::Clear.expires_at(monday_9am(), manila(), five_pm()), None);
    }

    #[rstest]
    #[case("45m")]
    #[case("1H")]
    #[case("")]
    fn rejects_unknown_durations(#[case] input: &str) {
        assert_eq!(
            input.parse::<OverrideDuration>(),
            Err(OverrideError::InvalidDuration(input.to_string()))
        );
    }

    #[test]
    fn non_clear_override_requires_status() {
        assert_eq!(
            StatusOverride::new(None, OverrideDuration::OneHour),
            Err(OverrideError::MissingStatus)
        );
    }

    #[test]
    fn apply_sets_status_and_expiry() {
        let mut record =
            InstructorRecord::new("abc", "Dr. Reyes").with_location("Main Office", "100");
        let request = StatusOverride::new(
            Some(InstructorStatus::InMeeting),
            OverrideDuration::ThirtyMinutes,
        )
        .unwrap();

        request.apply(&mut record, monday_9am(), manila(), five_pm());

        assert_eq!(record.override_status, Some(InstructorStatus::InMeeting));
        assert_eq!(record.override_expires_at, Some(monday_9am() + Duration::minutes(30)));
        assert_eq!(record.location, "Main Office");
    }

    #[test]
    fn clear_resets_to_available_without_expiry() {
        let mut record = InstructorRecord::new("abc", "Dr. Reyes")
            .with_override(InstructorStatus::Busy, monday_9am() + Duration::hours(1));

        StatusOverride::new(Some(InstructorStatus::Busy), OverrideDuration::Clear)
            .unwrap()
            .apply(&mut record, monday_9am(), manila(), five_pm());

        assert_eq!(record.override_status, Some(InstructorStatus::Available));
        assert_eq!(record.override_expires_at, None);
    }
}
