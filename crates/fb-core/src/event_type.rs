//! Session event kinds and how their log tokens are matched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a session opened or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    End,
}

impl EventKind {
    /// The token as written in the log.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
        }
    }

    /// Parses a log token under the given matching rule.
    pub fn from_token(token: &str, matching: KindMatching) -> Result<Self, UnknownEventKind> {
        [Self::Start, Self::End]
            .into_iter()
            .find(|kind| matching.matches(kind.as_str(), token))
            .ok_or_else(|| UnknownEventKind(token.to_string()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s, KindMatching::Exact)
    }
}

impl Serialize for EventKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// How the `Start`/`End` token is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindMatching {
    /// Case-sensitive: only `Start` and `End`.
    #[default]
    Exact,
    /// ASCII case-insensitive: `start`, `END`, ... are accepted too.
    IgnoreCase,
}

impl KindMatching {
    fn matches(self, canonical: &str, token: &str) -> bool {
        match self {
            Self::Exact => canonical == token,
            Self::IgnoreCase => canonical.eq_ignore_ascii_case(token),
        }
    }
}

/// Error type for unrecognized event tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventKind(String);

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event kind: {}", self.0)
    }
}

impl std::error::Error for UnknownEventKind {}
