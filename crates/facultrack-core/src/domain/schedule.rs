//! Weekly timetable model: days, clock times and schedule slots.

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ScheduleError;
use super::status::InstructorStatus;

/// Day of the week a slot repeats on.
///
/// Serialized as the full capitalized English name ("Monday").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

impl FromStr for Day {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Day::Monday),
            "Tuesday" => Ok(Day::Tuesday),
            "Wednesday" => Ok(Day::Wednesday),
            "Thursday" => Ok(Day::Thursday),
            "Friday" => Ok(Day::Friday),
            "Saturday" => Ok(Day::Saturday),
            "Sunday" => Ok(Day::Sunday),
            other => Err(ScheduleError::InvalidDay(other.to_string())),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wall-clock time with minute precision, written as `HH:MM`.
///
/// Ordering matches the lexicographic order of the zero-padded string form,
/// which is what stored schedules have always been compared by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Returns `None` unless `hour < 24` and `minute < 60`.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                minutes: u16::from(hour) * 60 + u16::from(minute),
            })
        } else {
            None
        }
    }

    /// Drops seconds and below.
    pub fn from_time(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }

    pub fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTime(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digit = |b: u8| if b.is_ascii_digit() { Ok(b - b'0') } else { Err(invalid()) };
        let hour = digit(bytes[0])? * 10 + digit(bytes[1])?;
        let minute = digit(bytes[3])? * 10 + digit(bytes[4])?;
        TimeOfDay::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// One repeating slot of an instructor's weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day: Day,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,

    /// Status while this slot is current. Absent or blank reads as "In Class".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InstructorStatus>,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub room: String,
}

impl ScheduleEntry {
    pub fn new(day: Day, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            day,
            start_time,
            end_time,
            status: None,
            location: String::new(),
            room: String::new(),
        }
    }

    pub fn with_status(mut self, status: InstructorStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn at(mut self, location: impl Into<String>, room: impl Into<String>) -> Self {
        self.location = location.into();
        self.room = room.into();
        self
    }

    /// Half-open match: `start_time <= clock < end_time` on the same day.
    pub fn contains(&self, day: Day, clock: TimeOfDay) -> bool {
        self.day == day && self.start_time <= clock && clock < self.end_time
    }

    /// The label to show while this slot is current.
    pub fn effective_status(&self) -> InstructorStatus {
        match &self.status {
            Some(status) if !status.is_blank() => status.clone(),
            _ => InstructorStatus::InClass,
        }
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.start_time < self.end_time {
            Ok(())
        } else {
            Err(ScheduleError::EmptySlot {
                day: self.day,
                start: self.start_time,
                end: self.end_time,
            })
        }
    }

    fn overlaps(&self, other: &ScheduleEntry) -> bool {
        self.day == other.day
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }
}

/// Index pairs `(i, j)`, `i < j`, of same-day slots whose intervals overlap.
///
/// Resolution does not consult this; overlapping slots still resolve by list
/// order. It exists so callers can report the data-quality problem.
pub fn overlapping_slots(schedule: &[ScheduleEntry]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in schedule.iter().enumerate() {
        for (j, b) in schedule.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
