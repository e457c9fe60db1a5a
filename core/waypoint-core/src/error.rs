//! Error types for waypoint-core operations.
//!
//! Nothing here is user-visible: every error degrades to "skip restoration"
//! at the session layer rather than blocking the UI.

use crate::ids::{ActivityId, TripId};

/// All errors that can occur in waypoint-core operations.
#[derive(Debug, thiserror::Error)]
pub enum WaypointError {
    // ─────────────────────────────────────────────────────────────────────
    // Navigation Reference Errors
    // ─────────────────────────────────────────────────────────────────────
    /// A reference was built or saved against a trip that does not own the
    /// activity. Programmer error; callers reject it and move on.
    #[error("activity {activity_id} belongs to trip {owner}, not {expected}")]
    OwnershipMismatch {
        activity_id: ActivityId,
        owner: TripId,
        expected: TripId,
    },

    /// Persisted reference bytes did not parse to the expected shape.
    #[error("malformed navigation reference: {details}")]
    MalformedReference { details: String },

    // ─────────────────────────────────────────────────────────────────────
    // Storage Errors
    // ─────────────────────────────────────────────────────────────────────
    /// The underlying persistence medium could not be read or written.
    #[error("storage unavailable: {context}: {source}")]
    StorageUnavailable {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using WaypointError.
pub type Result<T> = std::result::Result<T, WaypointError>;

impl WaypointError {
    pub(crate) fn storage(context: impl Into<String>, source: std::io::Error) -> Self {
        WaypointError::StorageUnavailable {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn malformed(source: &serde_json::Error) -> Self {
        WaypointError::MalformedReference {
            details: source.to_string(),
        }
    }
}
