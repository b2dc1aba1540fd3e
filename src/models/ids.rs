//! Strongly-typed ID wrapper for expense records
//!
//! A newtype over UUID keeps ids opaque and prevents mixing them up with
//! other strings at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique, stable identifier for an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form for display: the first 8 hex characters
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }

    /// Check whether a user-supplied string refers to this id
    ///
    /// Matches the full UUID or any prefix of at least 4 characters, so the
    /// short form shown in listings can be typed back in.
    pub fn matches(&self, s: &str) -> bool {
        let s = s.trim().to_ascii_lowercase();
        s.len() >= 4 && self.0.to_string().starts_with(&s)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
