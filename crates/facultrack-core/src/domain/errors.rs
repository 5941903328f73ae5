//! Errors raised by domain-level parsing and validation.
//!
//! Resolution itself never fails; these only surface when schedules or
//! override requests are built from untrusted input.

use thiserror::Error;

use super::schedule::{Day, TimeOfDay};

/// A schedule entry or one of its fields could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid time of day {0:?}, expected zero-padded HH:MM")]
    InvalidTime(String),

    #[error("invalid day {0:?}, expected a full weekday name such as \"Monday\"")]
    InvalidDay(String),

    #[error("slot on {day} must start before it ends ({start}-{end})")]
    EmptySlot {
        day: Day,
        start: TimeOfDay,
        end: TimeOfDay,
    },
}

/// A status override request could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    #[error("invalid override duration {0:?}, expected one of 30m, 1h, 2h, eod, clear")]
    InvalidDuration(String),

    #[error("override requires a status unless the duration is \"clear\"")]
    MissingStatus,
}
