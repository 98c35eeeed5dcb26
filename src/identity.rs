//! Layer 1: Identity atoms.
//!
//! [`Username`] is the single identity in the system: authors name
//! themselves, and the social graph is keyed by name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidUsername};

/// Validated username: non-empty, no embedded whitespace.
///
/// Raw strings enter through [`Username::parse`]. A constructed value stays
/// valid for its whole life, so engine operations take usernames without
/// re-checking.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Parse and validate a raw username.
    pub fn parse(raw: impl Into<String>) -> Result<Self, Error> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidUsername {
                raw,
                reason: "empty".to_string(),
            }
            .into());
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(InvalidUsername {
                raw,
                reason: "contains whitespace".to_string(),
            }
            .into());
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username({:?})", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}
