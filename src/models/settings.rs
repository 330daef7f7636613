//! TournamentSettings, BracketType and the caller-side validation error.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default pool count when `pool_count` is not set.
pub const DEFAULT_POOL_COUNT: usize = 4;
/// Default pool size when `pool_size` is not set (advisory only).
pub const DEFAULT_POOL_SIZE: usize = 4;

/// Errors reported by [`TournamentSettings::validate`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SettingsError {
    /// The field list is empty.
    NoFields,
    /// A field label appears more than once.
    DuplicateField(String),
    /// Match duration must be positive.
    ZeroMatchDuration,
    /// `end_time` is not after `start_time`.
    EmptyWindow { start: NaiveTime, end: NaiveTime },
    /// `pool_count` was set to zero.
    ZeroPoolCount,
    /// `pool_size` was set to zero.
    ZeroPoolSize,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::NoFields => write!(f, "At least one field is required"),
            SettingsError::DuplicateField(name) => write!(f, "Field \"{}\" is listed more than once", name),
            SettingsError::ZeroMatchDuration => write!(f, "Match duration must be at least one minute"),
            SettingsError::EmptyWindow { start, end } => write!(
                f,
                "End time {} must be after start time {}",
                end.format("%H:%M"),
                start.format("%H:%M")
            ),
            SettingsError::ZeroPoolCount => write!(f, "Pool count must be at least 1"),
            SettingsError::ZeroPoolSize => write!(f, "Pool size must be at least 1"),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Competition format.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketType {
    #[default]
    RoundRobin,
    SingleElimination,
    DoubleElimination,
    Pools,
}

/// What the scheduler does once the cursor reaches the end of the daily window.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayRollover {
    /// Jump to `start_time` on the next calendar day and use that day's window.
    #[default]
    NextDayStart,
    /// Add 24 hours to the cursor; the window end stays on the first day.
    #[serde(rename = "flat_24_hours")]
    Flat24Hours,
}

/// Parameters for one bracket generation call.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    #[serde(default)]
    pub bracket_type: BracketType,
    #[serde(default = "default_match_duration")]
    pub match_duration_minutes: u32,
    #[serde(default = "default_break_time")]
    pub break_time_minutes: u32,
    /// Ordered, distinct field labels rotated onto the schedule.
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    #[serde(with = "hh_mm", default = "default_start_time")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm", default = "default_end_time")]
    pub end_time: NaiveTime,
    /// Only consulted for `BracketType::Pools`.
    #[serde(default)]
    pub pool_count: Option<usize>,
    /// Advisory; membership comes from even distribution.
    #[serde(default)]
    pub pool_size: Option<usize>,
    #[serde(default)]
    pub day_rollover: DayRollover,
}

fn default_match_duration() -> u32 {
    90
}

fn default_break_time() -> u32 {
    10
}

fn default_fields() -> Vec<String> {
    vec!["Field 1".to_string(), "Field 2".to_string()]
}

fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

fn default_end_time() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default()
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            bracket_type: BracketType::default(),
            match_duration_minutes: default_match_duration(),
            break_time_minutes: default_break_time(),
            fields: default_fields(),
            start_time: default_start_time(),
            end_time: default_end_time(),
            pool_count: None,
            pool_size: None,
            day_rollover: DayRollover::default(),
        }
    }
}

impl TournamentSettings {
    /// Default settings with the given bracket type.
    pub fn with_bracket_type(bracket_type: BracketType) -> Self {
        Self {
            bracket_type,
            ..Self::default()
        }
    }

    pub fn pool_count_or_default(&self) -> usize {
        self.pool_count.unwrap_or(DEFAULT_POOL_COUNT)
    }

    pub fn pool_size_or_default(&self) -> usize {
        self.pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }

    /// Minutes between consecutive match starts.
    pub fn slot_minutes(&self) -> i64 {
        i64::from(self.match_duration_minutes) + i64::from(self.break_time_minutes)
    }

    /// Check the preconditions the engine assumes. The engine itself never calls this.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.fields.is_empty() {
            return Err(SettingsError::NoFields);
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.as_str()) {
                return Err(SettingsError::DuplicateField(field.clone()));
            }
        }
        if self.match_duration_minutes == 0 {
            return Err(SettingsError::ZeroMatchDuration);
        }
        if self.end_time <= self.start_time {
            return Err(SettingsError::EmptyWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if self.pool_count == Some(0) {
            return Err(SettingsError::ZeroPoolCount);
        }
        if self.pool_size == Some(0) {
            return Err(SettingsError::ZeroPoolSize);
        }
        Ok(())
    }
}

/// `"HH:MM"` (de)serialization for time-of-day values.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(s.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}
