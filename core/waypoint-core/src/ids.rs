//! Stable identifiers for trips and activities.
//!
//! Identifiers are opaque strings (ULIDs when generated by us) and serialize
//! transparently, so the persisted form is exactly the canonical string form.
//! They are assigned once at entity creation and never change.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Globally unique identifier for a trip.
///
/// Used as the scoping key for all per-trip navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(String);

impl TripId {
    /// Generates a fresh trip identifier.
    pub fn generate() -> Self {
        TripId(Ulid::new().to_string())
    }

    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        TripId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TripId {
    fn from(value: &str) -> Self {
        TripId::new(value)
    }
}

/// Globally unique identifier for a single activity instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// Generates a fresh activity identifier.
    pub fn generate() -> Self {
        ActivityId(Ulid::new().to_string())
    }

    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        ActivityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ActivityId {
    fn from(value: &str) -> Self {
        ActivityId::new(value)
    }
}
