//! Domain models for wall-clock times and step durations.
//!
//! This module provides the core value types used by the range generator:
//! immutable times of day, additive step durations, and the elapsed-minutes
//! measure used for all ordering and boundary comparisons.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::parsing::clock::{self, ParseTimeError};

/// Minutes in one full day; a `TimeOfDay` elapsed value is always below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time with no date or timezone component.
///
/// Hour is always in `[0, 23]` and minute in `[0, 59]`; the constructors
/// enforce this, so a `TimeOfDay` value is valid by construction.
///
/// # Examples
///
/// ```
/// use timegrid::core::domain::TimeOfDay;
///
/// let t = TimeOfDay::new(9, 30).unwrap();
/// assert_eq!(t.to_string(), "09:30");
/// assert_eq!(t.minutes_from_midnight(), 570);
///
/// let parsed: TimeOfDay = "23:59".parse().unwrap();
/// assert_eq!(parsed.hour(), 23);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight, the earliest representable time.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Creates a new time of day, or `None` if either component is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Builds a time of day from minutes since midnight.
    ///
    /// Returns `None` when `minutes` reaches into the next day (>= 1440).
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Some(Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        })
    }

    /// Hour component, `0..=23`.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component, `0..=59`.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Total minutes since midnight.
    ///
    /// This is the elapsed-time measure used for ordering and boundary
    /// comparisons throughout the crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use timegrid::core::domain::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::new(1, 30).unwrap().minutes_from_midnight(), 90);
    /// ```
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Converts to a `chrono::NaiveTime` at second zero.
    pub fn to_naive_time(&self) -> NaiveTime {
        // Components are in range by construction.
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Builds a time of day from a `chrono::NaiveTime`, discarding seconds.
    pub fn from_naive_time(t: NaiveTime) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        clock::parse_time_of_day(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// An hour/minute increment applied repeatedly to advance a [`TimeOfDay`].
///
/// Unlike `TimeOfDay`, a step is not clamped to a single day: it is a plain
/// duration in whole minutes, used only additively. Steps parsed from the
/// `HH:mm` form are therefore at most `23:59`, but arithmetic on accumulated
/// positions may run past midnight before the range generator's boundary
/// check stops it.
///
/// # Examples
///
/// ```
/// use timegrid::core::domain::TimeStep;
///
/// let step = TimeStep::new(1, 30);
/// assert_eq!(step.total_minutes(), 90);
/// assert!(!step.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStep {
    minutes: u32,
}

impl TimeStep {
    /// Creates a step from hour and minute components.
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self {
            minutes: hours * 60 + minutes,
        }
    }

    /// Creates a step from a total minute count.
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Total length of the step in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns `true` for the degenerate `00:00` step, which can never advance
    /// a position and is rejected by the range generator.
    pub fn is_zero(&self) -> bool {
        self.minutes == 0
    }
}

impl From<TimeOfDay> for TimeStep {
    fn from(t: TimeOfDay) -> Self {
        Self {
            minutes: t.minutes_from_midnight(),
        }
    }
}

impl fmt::Display for TimeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}
