//! Session matching algorithm.
//!
//! Reconciles a time-ordered, possibly unbalanced stream of `Start`/`End`
//! events into billable sessions per user.
//!
//! # Algorithm Summary
//!
//! 1. Route each event to its user's ledger, creating ledgers in first-seen order
//! 2. A `Start` is pushed onto the ledger's open-start stack
//! 3. An `End` closes the most recent open `Start` (LIFO); with none open it
//!    is pushed onto the open-end stack as an orphan
//! 4. Once the stream is consumed, orphaned ends are billed from the earliest
//!    timestamp in the whole stream and orphaned starts until the latest
//!
//! Pairing each `End` with the nearest still-open `Start` yields the minimum
//! total billed duration when one user's sessions overlap.

use std::collections::HashMap;

use crate::clock::Timestamp;
use crate::event::Event;
use crate::event_type::EventKind;
use crate::stream::{EventStream, Landmarks};
use crate::types::Username;

/// Billing totals for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub username: Username,

    /// Billed sessions: `closed_sessions + orphaned_starts + orphaned_ends`.
    pub session_count: u64,

    /// Sum of all billed session durations in seconds.
    pub total_duration_secs: u64,

    /// Sessions whose `Start` was paired with an `End`.
    pub closed_sessions: u64,

    /// `Start` events billed until the latest landmark.
    pub orphaned_starts: u64,

    /// `End` events billed from the earliest landmark.
    pub orphaned_ends: u64,
}

/// Per-user summaries in the order each user first appears in the stream.
///
/// The order lives in an explicit list; the map only indexes into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    summaries: Vec<UserSummary>,
    index: HashMap<Username, usize>,
}

impl ResultSet {
    fn push(&mut self, summary: UserSummary) {
        self.index
            .insert(summary.username.clone(), self.summaries.len());
        self.summaries.push(summary);
    }

    /// Looks up a user's summary by name.
    pub fn get(&self, username: &str) -> Option<&UserSummary> {
        self.index.get(username).map(|&i| &self.summaries[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserSummary> {
        self.summaries.iter()
    }

    /// User names in first-seen order.
    pub fn usernames(&self) -> impl Iterator<Item = &Username> {
        self.summaries.iter().map(|s| &s.username)
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a UserSummary;
    type IntoIter = std::slice::Iter<'a, UserSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.iter()
    }
}

/// Open sessions and running totals for a single user.
#[derive(Debug, Default)]
struct SessionLedger {
    open_starts: Vec<Timestamp>,
    open_ends: Vec<Timestamp>,
    session_count: u64,
    total_duration_secs: u64,
    closed_sessions: u64,
}

impl SessionLedger {
    fn record(&mut self, event: &Event) {
        match event.kind {
            EventKind::Start => self.open_starts.push(event.timestamp),
            EventKind::End => {
                if let Some(start) = self.open_starts.pop() {
                    self.add_session(start, event.timestamp);
                    self.closed_sessions += 1;
                } else {
                    self.open_ends.push(event.timestamp);
                }
            }
        }
    }

    fn add_session(&mut self, start: Timestamp, end: Timestamp) {
        if end < start {
            tracing::warn!(%start, %end, "session ends before it starts, billing zero");
        }
        self.session_count += 1;
        self.total_duration_secs += u64::from(end.saturating_since(start));
    }

    /// Bills the remaining orphans and produces the summary.
    fn settle(mut self, username: Username, landmarks: Landmarks) -> UserSummary {
        let orphaned_ends = self.open_ends.len() as u64;
        let orphaned_starts = self.open_starts.len() as u64;

        while let Some(end) = self.open_ends.pop() {
            self.add_session(landmarks.earliest, end);
        }
        while let Some(start) = self.open_starts.pop() {
            self.add_session(start, landmarks.latest);
        }

        UserSummary {
            username,
            session_count: self.session_count,
            total_duration_secs: self.total_duration_secs,
            closed_sessions: self.closed_sessions,
            orphaned_starts,
            orphaned_ends,
        }
    }
}

/// Bills every user in `stream` against the stream's own landmarks.
///
/// An empty stream yields an empty result set.
pub fn bill(stream: &EventStream) -> ResultSet {
    stream
        .landmarks()
        .map(|landmarks| bill_with_landmarks(stream, landmarks))
        .unwrap_or_default()
}

/// Bills every user in `stream`, resolving orphans against `landmarks`.
///
/// Landmarks must bound every timestamp in the stream; durations that
/// would be negative otherwise are billed as zero.
pub fn bill_with_landmarks(stream: &EventStream, landmarks: Landmarks) -> ResultSet {
    let mut ledgers: Vec<(&Username, SessionLedger)> = Vec::new();
    let mut slots: HashMap<&Username, usize> = HashMap::new();

    for event in stream {
        let slot = *slots.entry(&event.username).or_insert_with(|| {
            ledgers.push((&event.username, SessionLedger::default()));
            ledgers.len() - 1
        });
        ledgers[slot].1.record(event);
    }

    tracing::debug!(
        earliest = %landmarks.earliest,
        latest = %landmarks.latest,
        users = ledgers.len(),
        "settling sessions"
    );

    let mut results = ResultSet::default();
    for (username, ledger) in ledgers {
        let summary = ledger.settle(username.clone(), landmarks);
        tracing::debug!(
            user = %summary.username,
            sessions = summary.session_count,
            duration_secs = summary.total_duration_secs,
            orphaned_starts = summary.orphaned_starts,
            orphaned_ends = summary.orphaned_ends,
            "billed user"
        );
        results.push(summary);
    }
    results
}
