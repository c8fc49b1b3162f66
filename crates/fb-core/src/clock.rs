//! Time-of-day codec for `HH:MM:SS` log timestamps.
//!
//! The log covers a single 24-hour clock, so every timestamp is stored as
//! seconds since midnight in `[0, 86399]`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Number of seconds in one day.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Errors produced when decoding a time-of-day string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The text is not three colon-separated runs of digits.
    #[error("expected HH:MM:SS, got {0:?}")]
    Format(String),

    /// A component is outside its valid range.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },
}

/// Seconds since midnight, guaranteed to be within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u32);

impl Timestamp {
    /// Creates a timestamp from seconds since midnight.
    ///
    /// Returns `None` for values of a day or more.
    #[must_use]
    pub const fn from_seconds(seconds: u32) -> Option<Self> {
        if seconds < SECONDS_PER_DAY {
            Some(Self(seconds))
        } else {
            None
        }
    }

    /// Returns the number of seconds since midnight.
    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self`, clamped at zero.
    #[must_use]
    pub const fn saturating_since(self, earlier: Self) -> u32 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NaiveTime::from_num_seconds_from_midnight_opt(self.0, 0) {
            Some(time) => write!(f, "{}", time.format("%H:%M:%S")),
            None => write!(f, "{}s", self.0),
        }
    }
}

impl FromStr for Timestamp {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Builds a timestamp from clock components.
///
/// Returns `None` unless hours are 0–23 and minutes and seconds are 0–59.
#[must_use]
pub const fn encode(hours: u32, minutes: u32, seconds: u32) -> Option<Timestamp> {
    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }
    Some(Timestamp(hours * 3600 + minutes * 60 + seconds))
}

/// Decodes `HH:MM:SS` text into a timestamp.
///
/// Surrounding whitespace is ignored. Each field must consist of ASCII
/// digits only; signs, empty fields and overflowing values are rejected.
pub fn decode(text: &str) -> Result<Timestamp, ClockError> {
    let trimmed = text.trim();
    let fields: Vec<&str> = trimmed.split(':').collect();
    let [hours, minutes, seconds] = fields.as_slice() else {
        return Err(ClockError::Format(trimmed.to_string()));
    };

    let hours = parse_field(hours, trimmed)?;
    let minutes = parse_field(minutes, trimmed)?;
    let seconds = parse_field(seconds, trimmed)?;

    if hours > 23 {
        return Err(ClockError::OutOfRange {
            field: "hours",
            value: hours,
        });
    }
    if minutes > 59 {
        return Err(ClockError::OutOfRange {
            field: "minutes",
            value: minutes,
        });
    }
    if seconds > 59 {
        return Err(ClockError::OutOfRange {
            field: "seconds",
            value: seconds,
        });
    }

    encode(hours, minutes, seconds).ok_or_else(|| ClockError::Format(trimmed.to_string()))
}

fn parse_field(field: &str, text: &str) -> Result<u32, ClockError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClockError::Format(text.to_string()));
    }
    field
        .parse()
        .map_err(|_| ClockError::Format(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_valid_times() {
        assert_eq!(decode("00:00:00").unwrap().seconds(), 0);
        assert_eq!(decode("14:02:03").unwrap().seconds(), 50523);
        assert_eq!(decode("23:59:59").unwrap().seconds(), 86399);
    }

    #[test]
    fn decode_rejects_out_of_range_components() {
        assert_eq!(
            decode("25:00:00"),
            Err(ClockError::OutOfRange {
                field: "hours",
                value: 25
            })
        );
        assert_eq!(
            decode("14:60:00"),
            Err(ClockError::OutOfRange {
                field: "minutes",
                value: 60
            })
        );
        assert_eq!(
            decode("14:02:60"),
            Err(ClockError::OutOfRange {
                field: "seconds",
                value: 60
            })
        );
    }

    #[test]
    fn decode_rejects_malformed_text() {
        for text in [
            "invalid",
            "14:02",
            "14:02:03:04",
            "14::03",
            "-1:02:03",
            "+1:02:03",
            "aa:bb:cc",
            "",
            "99999999999:00:00",
        ] {
            assert!(
                matches!(decode(text), Err(ClockError::Format(_))),
                "{text:?} should be a format error"
            );
        }
    }

    #[test]
    fn decode_trims_surrounding_whitespace() {
        assert_eq!(decode("  01:00:00\t").unwrap().seconds(), 3600);
    }

    #[test]
    fn encode_checks_ranges() {
        assert_eq!(encode(23, 59, 59).map(Timestamp::seconds), Some(86399));
        assert_eq!(encode(24, 0, 0), None);
        assert_eq!(encode(0, 60, 0), None);
        assert_eq!(encode(0, 0, 60), None);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(decode("14:02:03").unwrap().to_string(), "14:02:03");
        assert_eq!(Timestamp::from_seconds(0).unwrap().to_string(), "00:00:00");
        assert_eq!(
            Timestamp::from_seconds(3661).unwrap().to_string(),
            "01:01:01"
        );
    }

    #[test]
    fn from_seconds_rejects_a_full_day() {
        assert!(Timestamp::from_seconds(SECONDS_PER_DAY - 1).is_some());
        assert!(Timestamp::from_seconds(SECONDS_PER_DAY).is_none());
    }

    #[test]
    fn saturating_since_clamps_at_zero() {
        let early = Timestamp::from_seconds(100).unwrap();
        let late = Timestamp::from_seconds(130).unwrap();
        assert_eq!(late.saturating_since(early), 30);
        assert_eq!(early.saturating_since(late), 0);
    }

    #[test]
    fn serializes_as_clock_text() {
        let ts: Timestamp = "09:05:00".parse().unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"09:05:00\"");
    }
}
