//! Runtime configuration.
//!
//! Loaded from a TOML file; every key is optional:
//!
//! ```toml
//! timezone = "+08:00"   # reference timezone for schedule matching
//! end_of_day = "17:00"  # expiry of "eod" overrides
//! ```
//!
//! `FACULTRACK_TIMEZONE` in the environment overrides the file's `timezone`.

use chrono::FixedOffset;
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::TimeOfDay;
use crate::resolver::{StatusResolver, default_timezone};

pub const TIMEZONE_ENV: &str = "FACULTRACK_TIMEZONE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid timezone offset {0:?}, expected +HH:MM, -HH:MM or UTC")]
    InvalidTimezone(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Timezone in which weekday and `HH:MM` are derived. Never the host zone.
    pub timezone: FixedOffset,
    pub end_of_day: TimeOfDay,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            end_of_day: default_end_of_day(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    timezone: Option<String>,
    end_of_day: Option<TimeOfDay>,
}

fn default_end_of_day() -> TimeOfDay {
    TimeOfDay::new(17, 0).unwrap_or_default()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let timezone = match raw.timezone {
            Some(s) => parse_utc_offset(&s)?,
            None => default_timezone(),
        };
        Ok(Self {
            timezone,
            end_of_day: raw.end_of_day.unwrap_or_else(default_end_of_day),
        })
    }

    /// Applies `FACULTRACK_TIMEZONE` if set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        match env::var(TIMEZONE_ENV) {
            Ok(value) => {
                info!("{TIMEZONE_ENV} set, using timezone {value}");
                self.with_timezone_override(&value)
            }
            Err(env::VarError::NotPresent) => Ok(self),
            Err(e) => {
                warn!("ignoring {TIMEZONE_ENV}: {e}");
                Ok(self)
            }
        }
    }

    fn with_timezone_override(mut self, value: &str) -> Result<Self, ConfigError> {
        self.timezone = parse_utc_offset(value)?;
        Ok(self)
    }

    pub fn resolver(&self) -> StatusResolver {
        StatusResolver::new(self.timezone)
    }
}

/// Parses `+HH:MM`, `-HH:MM`, `UTC` or `Z`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidTimezone(s.to_string());
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(hours) || !digits(minutes) {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 14 || minutes >= 60 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timezone.local_minus_utc(), 8 * 3600);
        assert_eq!(config.end_of_day.to_string(), "17:00");
    }

    #[test]
    fn reads_timezone_and_end_of_day() {
        let config = Config::from_toml_str(
            r#"
            timezone = "-05:30"
            end_of_day = "18:15"
            "#,
        )
        .unwrap();
        assert_eq!(config.timezone.local_minus_utc(), -(5 * 3600 + 30 * 60));
        assert_eq!(config.end_of_day.to_string(), "18:15");
    }

    #[test]
    fn bad_end_of_day_is_parse_error() {
        let err = Config::from_toml_str(r#"end_of_day = "5pm""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_key_is_parse_error() {
        let err = Config::from_toml_str(r#"timezon = "+08:00""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn override_replaces_timezone_only() {
        let config = Config::default().with_timezone_override("UTC").unwrap();
        assert_eq!(config.timezone.local_minus_utc(), 0);
        assert_eq!(config.end_of_day, Config::default().end_of_day);
    }

    #[rstest]
    #[case("+08:00", 8 * 3600)]
    #[case("-03:30", -(3 * 3600 + 30 * 60))]
    #[case("+00:00", 0)]
    #[case("UTC", 0)]
    #[case("Z", 0)]
    fn parses_offsets(#[case] input: &str, #[case] seconds: i32) {
        assert_eq!(parse_utc_offset(input).unwrap().local_minus_utc(), seconds);
    }

    #[rstest]
    #[case("08:00")]
    #[case("+8:00")]
    #[case("+0800")]
    #[case("+25:00")]
    #[case("Asia/Manila")]
    #[case("")]
    fn rejects_malformed_offsets(#[case] input: &str) {
        assert!(matches!(
            parse_utc_offset(input),
            Err(ConfigError::InvalidTimezone(_))
        ));
    }
}
