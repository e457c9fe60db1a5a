//! Navigation reference codec.
//!
//! A [`NavigationReference`] is a durable pointer to "the activity last viewed
//! under this trip". It is built from a live activity plus the owning trip's
//! identifier, and round-trips losslessly through its JSON encoding.
//!
//! # Persisted Format
//!
//! ```json
//! { "activityId": "A1", "activityType": "transportation", "tripId": "T1" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypointError};
use crate::ids::{ActivityId, TripId};
use crate::types::{Activity, ActivityKind};

/// Durable pointer to the last-viewed activity of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavigationReference {
    pub activity_id: ActivityId,
    pub activity_type: ActivityKind,
    pub trip_id: TripId,
}

impl NavigationReference {
    /// Builds a reference from a live activity and the trip it is presented
    /// under.
    ///
    /// Fails with [`WaypointError::OwnershipMismatch`] if `owner_trip_id` is
    /// not the activity's actual owner. That is a caller bug, so debug builds
    /// assert on it; release builds reject and carry on.
    pub fn build(activity: &Activity, owner_trip_id: &TripId) -> Result<Self> {
        debug_assert_eq!(
            activity.owner_trip_id(),
            owner_trip_id,
            "navigation reference built against a trip that does not own activity {}",
            activity.id()
        );
        if activity.owner_trip_id() != owner_trip_id {
            return Err(WaypointError::OwnershipMismatch {
                activity_id: activity.id().clone(),
                owner: activity.owner_trip_id().clone(),
                expected: owner_trip_id.clone(),
            });
        }

        Ok(NavigationReference {
            activity_id: activity.id().clone(),
            activity_type: activity.kind(),
            trip_id: owner_trip_id.clone(),
        })
    }

    /// Encodes the reference for persistence. Total for well-formed references.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("navigation reference serialization is infallible")
    }

    /// Decodes a persisted reference.
    ///
    /// Fails with [`WaypointError::MalformedReference`] if the bytes do not
    /// parse to the expected shape (missing field, wrong kind tag, unparseable
    /// identifier).
    pub fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| WaypointError::malformed(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Trip;

    fn trip_and_activity(kind: ActivityKind) -> (Trip, Activity) {
        let trip = Trip::new("Japan");
        let activity = Activity::new(&trip, kind, "test");
        (trip, activity)
    }

    #[test]
    fn test_build_captures_activity_kind_and_owner() {
        let (trip, activity) = trip_and_activity(ActivityKind::Lodging);
        let reference = NavigationReference::build(&activity, trip.id()).unwrap();
        assert_eq!(reference.activity_id, *activity.id());
        assert_eq!(reference.activity_type, ActivityKind::Lodging);
        assert_eq!(reference.trip_id, *trip.id());
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_build_rejects_wrong_owner() {
        let (_trip, activity) = trip_and_activity(ActivityKind::Activity);
        let other = Trip::new("Norway");
        let err = NavigationReference::build(&activity, other.id()).unwrap_err();
        assert!(matches!(err, WaypointError::OwnershipMismatch { .. }));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_build_asserts_on_wrong_owner_in_debug() {
        let (_trip, activity) = trip_and_activity(ActivityKind::Activity);
        let other = Trip::new("Norway");
        let _ = NavigationReference::build(&activity, other.id());
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        for kind in [
            ActivityKind::Activity,
            ActivityKind::Lodging,
            ActivityKind::Transportation,
        ] {
            let (trip, activity) = trip_and_activity(kind);
            let reference = NavigationReference::build(&activity, trip.id()).unwrap();
            let decoded = NavigationReference::decode(&reference.encode()).unwrap();
            assert_eq!(decoded, reference);
        }
    }

    #[test]
    fn test_encoded_form_uses_stable_field_names() {
        let reference = NavigationReference {
            activity_id: ActivityId::new("A1"),
            activity_type: ActivityKind::Transportation,
            trip_id: TripId::new("T1"),
        };
        let encoded = reference.encode();
        assert!(encoded.contains("\"activityId\":\"A1\""));
        assert!(encoded.contains("\"activityType\":\"transportation\""));
        assert!(encoded.contains("\"tripId\":\"T1\""));
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let err =
            NavigationReference::decode(r#"{"activityId":"A1","tripId":"T1"}"#).unwrap_err();
        assert!(matches!(err, WaypointError::MalformedReference { .. }));
    }

    #[test]
    fn test_decode_rejects_wrong_kind_tag() {
        let raw = r#"{"activityId":"A1","activityType":"hotel","tripId":"T1"}"#;
        let err = NavigationReference::decode(raw).unwrap_err();
        assert!(matches!(err, WaypointError::MalformedReference { .. }));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(NavigationReference::decode("not json").is_err());
    }
}
