//! Time slot types for room reservations.
//!
//! This module provides types for working with reservation time windows,
//! including duration validation, half-open interval computation, and
//! overlap checks.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A valid reservation duration in whole hours (at least 1).
///
/// # Examples
///
/// ```
/// use roombook::Hours;
///
/// // Valid duration
/// let hours = Hours::try_from(2).unwrap();
/// assert_eq!(hours.value(), 2);
///
/// // Invalid duration (0)
/// assert!(Hours::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(u32);

impl Hours {
    /// Returns the underlying number of hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::Hours;
    ///
    /// let hours = Hours::try_from(3).unwrap();
    /// assert_eq!(hours.value(), 3);
    /// ```
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Hours {
    type Error = InvalidDurationError;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidDurationError {
                value,
                reason: "duration must be at least 1 hour".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDurationError {
    /// The invalid duration value.
    pub value: u32,
    /// The reason the duration is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid duration {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidDurationError {}

/// A reservation time window on a calendar date.
///
/// A slot covers the half-open interval `[start, start + duration)`. Times
/// are naive (local, no timezone) and may cross midnight into the next day.
///
/// # Examples
///
/// ```
/// use roombook::TimeSlot;
///
/// let a = TimeSlot::parse("2024-06-01", "10:00", "2").unwrap();
/// let b = TimeSlot::parse("2024-06-01", "11:00", "1").unwrap();
/// let c = TimeSlot::parse("2024-06-01", "12:00", "1").unwrap();
///
/// assert!(a.overlaps(&b));
/// // Touching at an endpoint is not an overlap
/// assert!(!a.overlaps(&c));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The calendar date of the reservation.
    pub date: NaiveDate,
    /// The start time of day.
    #[serde(with = "hhmm_format")]
    pub start: NaiveTime,
    /// The duration in whole hours.
    pub duration: Hours,
}

impl TimeSlot {
    /// Creates a new time slot.
    #[must_use]
    pub const fn new(date: NaiveDate, start: NaiveTime, duration: Hours) -> Self {
        Self {
            date,
            start,
            duration,
        }
    }

    /// Parses a time slot from the string fields of a booking request.
    ///
    /// Accepts dates as `YYYY-MM-DD`, start times as `HH:MM` (or `HH:MM:SS`),
    /// and durations as positive integers. Malformed input is rejected
    /// explicitly rather than carried through the overlap math as an invalid
    /// sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] naming the offending field.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::TimeSlot;
    ///
    /// let slot = TimeSlot::parse("2024-06-01", "10:00", "2").unwrap();
    /// assert_eq!(slot.duration.value(), 2);
    ///
    /// assert!(TimeSlot::parse("yesterday", "10:00", "2").is_err());
    /// assert!(TimeSlot::parse("2024-06-01", "10:00", "zero").is_err());
    /// ```
    pub fn parse(date: &str, start: &str, duration: &str) -> Result<Self> {
        Ok(Self {
            date: parse_date(date)?,
            start: parse_start_time(start)?,
            duration: parse_duration(duration)?,
        })
    }

    /// Returns the instant at which the slot begins.
    #[must_use]
    pub fn start_instant(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }

    /// Returns the instant at which the slot ends (exclusive).
    ///
    /// May fall on the following day for slots that cross midnight.
    #[must_use]
    pub fn end_instant(&self) -> NaiveDateTime {
        self.start_instant() + Duration::hours(i64::from(self.duration.value()))
    }

    /// Returns `true` if this slot shares at least one instant with `other`.
    ///
    /// Overlap is computed on half-open intervals: two slots that merely
    /// touch at an endpoint do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::TimeSlot;
    ///
    /// let morning = TimeSlot::parse("2024-06-01", "09:00", "3").unwrap();
    /// let noon = TimeSlot::parse("2024-06-01", "12:00", "1").unwrap();
    /// let other_day = TimeSlot::parse("2024-06-02", "09:00", "3").unwrap();
    ///
    /// assert!(!morning.overlaps(&noon));
    /// assert!(!morning.overlaps(&other_day));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_instant() < other.end_instant() && other.start_instant() < self.end_instant()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} for {}h",
            self.date,
            self.start.format("%H:%M"),
            self.duration
        )
    }
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| Error::MalformedInput {
        field: "date".into(),
        value: value.into(),
        reason: e.to_string(),
    })
}

/// Parses a start time in `HH:MM` form (seconds accepted and ignored).
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if the string is not a valid time of day.
pub fn parse_start_time(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| Error::MalformedInput {
            field: "start_time".into(),
            value: value.into(),
            reason: e.to_string(),
        })
}

/// Parses a duration in whole hours from a decimal string.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if the string is not a positive integer.
pub fn parse_duration(value: &str) -> Result<Hours> {
    let number: u32 = value.trim().parse().map_err(|_| Error::MalformedInput {
        field: "duration".into(),
        value: value.into(),
        reason: "duration must be a whole number of hours".into(),
    })?;

    Hours::try_from(number).map_err(|e| Error::MalformedInput {
        field: "duration".into(),
        value: value.into(),
        reason: e.reason,
    })
}

/// Serde adapter storing times as `HH:MM`, the snapshot wire format.
pub(crate) mod hhmm_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}


// Property-based tests for interval semantics
#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_slot() -> impl Strategy<Value = TimeSlot> {
        (0u32..3, 0u32..24, 0u32..60, 1u32..12).prop_map(|(day, hour, minute, hours)| {
            TimeSlot::new(
                NaiveDate::from_ymd_opt(2024, 6, day + 1).unwrap(),
                NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
                Hours::try_from(hours).unwrap(),
            )
        })
    }

    proptest! {
        /// Overlap holds exactly when each slot starts before the other
        /// ends, the defining property of half-open intervals.
        #[test]
        fn prop_overlap_matches_interval_definition(a in arb_slot(), b in arb_slot()) {
            let expected = a.start_instant() < b.end_instant()
                && b.start_instant() < a.end_instant();
            prop_assert_eq!(a.overlaps(&b), expected);
        }

        /// Overlap is symmetric.
        #[test]
        fn prop_overlap_symmetric(a in arb_slot(), b in arb_slot()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        /// Every slot overlaps itself; durations are at least one hour.
        #[test]
        fn prop_overlap_reflexive(a in arb_slot()) {
            prop_assert!(a.overlaps(&a));
        }

        /// Back-to-back slots never overlap.
        #[test]
        fn prop_adjacent_slots_disjoint(a in arb_slot(), hours in 1u32..6) {
            let b = TimeSlot {
                date: a.end_instant().date(),
                start: a.end_instant().time(),
                duration: Hours::try_from(hours).unwrap(),
            };
            prop_assert!(!a.overlaps(&b));
        }

        /// The wire form parses back to the identical slot.
        #[test]
        fn prop_serde_round_trip(a in arb_slot()) {
            let json = serde_json::to_string(&a).unwrap();
            let back: TimeSlot = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, a);
        }
    }
}
