//! Session events parsed from a billing log.

use serde::Serialize;

use crate::clock::Timestamp;
use crate::event_type::EventKind;
use crate::types::Username;

/// One `Start` or `End` line from the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// When the event occurred.
    pub timestamp: Timestamp,
    /// Who the session belongs to.
    pub username: Username,
    /// Whether the session opened or closed.
    pub kind: EventKind,
}

impl Event {
    pub const fn new(timestamp: Timestamp, username: Username, kind: EventKind) -> Self {
        Self {
            timestamp,
            username,
            kind,
        }
    }

    pub const fn is_start(&self) -> bool {
        matches!(self.kind, EventKind::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_clock_time() {
        let event = Event::new(
            Timestamp::from_seconds(50523).unwrap(),
            Username::new("ALICE99").unwrap(),
            EventKind::Start,
        );

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"14:02:03","username":"ALICE99","kind":"Start"}"#
        );
        assert!(event.is_start());
    }
}
