//! Status resolution: override > current schedule slot > static default.
//!
//! This is the only place the weekly timetable is interpreted. Everything here
//! is a pure function of `(record, now)`: no I/O, no caching, inputs are only
//! borrowed for the duration of the call.

use chrono::{DateTime, Datelike, FixedOffset, Utc};

use crate::domain::{
    Day, InstructorRecord, InstructorStatus, ResolvedStatus, ScheduleEntry, StatusSource,
    TimeOfDay,
};

/// UTC+08:00, the single timezone the institution operates in.
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 8 * 3600;

pub fn default_timezone() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).expect("UTC+08:00 is within ±24h")
}

/// How to pick a slot when several same-day slots contain the current time.
///
/// Overlaps are a data-entry problem that nothing upstream rejects, so the
/// choice has to be deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotMatchPolicy {
    /// The earliest matching entry in stored list order.
    #[default]
    FirstMatchWins,
}

impl SlotMatchPolicy {
    fn select<'a>(
        &self,
        mut candidates: impl Iterator<Item = &'a ScheduleEntry>,
    ) -> Option<&'a ScheduleEntry> {
        match self {
            SlotMatchPolicy::FirstMatchWins => candidates.next(),
        }
    }
}

/// Weekday and `HH:MM` of an instant, as seen in the reference timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub day: Day,
    pub clock: TimeOfDay,
}

/// Derives an instructor's status for a given instant.
///
/// Schedules are matched in a fixed reference timezone, never the host's
/// local zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResolver {
    timezone: FixedOffset,
    policy: SlotMatchPolicy,
}

impl Default for StatusResolver {
    fn default() -> Self {
        Self::new(default_timezone())
    }
}

impl StatusResolver {
    pub fn new(timezone: FixedOffset) -> Self {
        Self {
            timezone,
            policy: SlotMatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SlotMatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn timezone(&self) -> FixedOffset {
        self.timezone
    }

    pub fn local_moment(&self, now: DateTime<Utc>) -> LocalMoment {
        let local = now.with_timezone(&self.timezone);
        LocalMoment {
            day: Day::from(local.weekday()),
            clock: TimeOfDay::from_time(local.time()),
        }
    }

    /// The slot current at `now`, if any.
    pub fn active_slot<'a>(
        &self,
        schedule: &'a [ScheduleEntry],
        now: DateTime<Utc>,
    ) -> Option<&'a ScheduleEntry> {
        let LocalMoment { day, clock } = self.local_moment(now);
        self.policy
            .select(schedule.iter().filter(|entry| entry.contains(day, clock)))
    }

    /// Effective status, location and room of `record` at `now`.
    ///
    /// Location and room always come from the current slot, or the static
    /// default when no slot is current. An override only replaces the label.
    pub fn resolve(&self, record: &InstructorRecord, now: DateTime<Utc>) -> ResolvedStatus {
        let slot = self.active_slot(&record.schedule, now);

        let (location, room) = match slot {
            Some(entry) => (entry.location.clone(), entry.room.clone()),
            None => (record.location.clone(), record.room.clone()),
        };

        if record.override_active_at(now) {
            return ResolvedStatus {
                status: record
                    .override_status
                    .clone()
                    .unwrap_or(InstructorStatus::Unavailable),
                location,
                room,
                override_expires_at: record.override_expires_at,
                source: StatusSource::Overridden,
            };
        }

        match slot {
            Some(entry) => ResolvedStatus {
                status: entry.effective_status(),
                location,
                room,
                override_expires_at: None,
                source: StatusSource::Scheduled,
            },
            None => ResolvedStatus {
                status: InstructorStatus::Available,
                location,
                room,
                override_expires_at: None,
                source: StatusSource::Default,
            },
        }
    }

    /// Resolves each record independently; output order follows input order.
    pub fn resolve_many<'a, I>(&self, records: I, now: DateTime<Utc>) -> Vec<ResolvedStatus>
    where
        I: IntoIterator<Item = &'a InstructorRecord>,
    {
        records
            .into_iter()
            .map(|record| self.resolve(record, now))
            .collect()
    }
}
