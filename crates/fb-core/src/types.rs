//! Core type definitions with validation.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The value contains a character outside the allowed set.
    #[error("{field} must be alphanumeric, got {value:?}")]
    NotAlphanumeric { field: &'static str, value: String },
}

/// A validated user name.
///
/// User names are non-empty runs of ASCII letters and digits, as they
/// appear in the second column of a billing log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Creates a new user name after validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }
        if !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::NotAlphanumeric {
                field: "username",
                value: name,
            });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Username {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric_names() {
        let name = Username::new("ALICE99").unwrap();
        assert_eq!(name.as_str(), "ALICE99");
        assert_eq!(name.to_string(), "ALICE99");
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            Username::new(""),
            Err(ValidationError::Empty { field: "username" })
        );
    }

    #[test]
    fn rejects_punctuation_and_non_ascii() {
        for bad in ["ALICE_99", "bob-smith", "car ol", "Zoë"] {
            assert!(
                matches!(
                    Username::new(bad),
                    Err(ValidationError::NotAlphanumeric { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<Username, _> = serde_json::from_str("\"CHARLIE\"");
        assert!(ok.is_ok());
        let bad: Result<Username, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
