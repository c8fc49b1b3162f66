//! Parsing of individual billing log lines.
//!
//! A line is `HH:MM:SS USERNAME Start|End`, with any amount of ASCII
//! whitespace between and around the fields. Anything else is rejected; rejection is
//! routine log noise, so callers simply skip the line.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::clock::{self, ClockError};
use crate::event::Event;
use crate::event_type::{EventKind, KindMatching, UnknownEventKind};
use crate::types::{Username, ValidationError};

/// Two digits per clock field. `\d` would also admit non-ASCII digits.
static TIME_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap());

/// Why a line produced no event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Wrong number of fields, or a time field not shaped `HH:MM:SS`.
    #[error("expected `HH:MM:SS USERNAME Start|End`")]
    Shape,

    #[error("invalid time: {0}")]
    Time(#[from] ClockError),

    #[error("invalid username: {0}")]
    Username(#[from] ValidationError),

    #[error(transparent)]
    Kind(#[from] UnknownEventKind),
}

/// Converts raw log lines into events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser {
    kind_matching: KindMatching,
}

impl LineParser {
    pub const fn new(kind_matching: KindMatching) -> Self {
        Self { kind_matching }
    }

    /// Parses one line into an event.
    pub fn parse(&self, line: &str) -> Result<Event, Rejection> {
        let mut fields = line.split_ascii_whitespace();
        let (Some(time), Some(username), Some(kind), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(Rejection::Shape);
        };

        if !TIME_FIELD_RE.is_match(time) {
            return Err(Rejection::Shape);
        }
        let timestamp = clock::decode(time)?;
        let username = Username::new(username)?;
        let kind = EventKind::from_token(kind, self.kind_matching)?;

        Ok(Event::new(timestamp, username, kind))
    }
}
