//! Time-ordered event streams.

use serde::Serialize;

use crate::clock::Timestamp;
use crate::event::Event;

/// Events in non-decreasing timestamp order.
///
/// The ordering is enforced on insertion: [`EventStream::push`] refuses any
/// event earlier than the last accepted one instead of reordering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStream {
    events: Vec<Event>,
}

impl EventStream {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Builds a stream by pushing each event in turn, dropping out-of-order ones.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut stream = Self::new();
        for event in events {
            stream.push(event);
        }
        stream
    }

    /// Appends `event` if it is not earlier than the last accepted event.
    ///
    /// Returns whether the event was accepted.
    pub fn push(&mut self, event: Event) -> bool {
        if self
            .last_timestamp()
            .is_some_and(|last| event.timestamp < last)
        {
            return false;
        }
        self.events.push(event);
        true
    }

    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.events.last().map(|e| e.timestamp)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// File-wide earliest and latest timestamps, or `None` for an empty stream.
    pub fn landmarks(&self) -> Option<Landmarks> {
        let earliest = self.events.iter().map(|e| e.timestamp).min()?;
        let latest = self.events.iter().map(|e| e.timestamp).max()?;
        Some(Landmarks { earliest, latest })
    }
}

impl<'a> IntoIterator for &'a EventStream {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Bounds used to bill orphaned events.
///
/// An orphaned `End` is billed from `earliest`; an orphaned `Start` is
/// billed until `latest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Landmarks {
    pub earliest: Timestamp,
    pub latest: Timestamp,
}
