//! Session-reset state machine for navigation restoration.
//!
//! Decides, for a trip-detail presentation, whether an automatic navigation
//! back to the last-viewed activity should fire. The view layer drives the
//! transitions and queries [`TripSession::restoration_target`] to perform the
//! actual navigation; this module never touches rendering.
//!
//! # Transitions
//!
//! ```text
//! Fresh ── on_trip_presented ──▶ Appeared ── on_trip_reappeared ──▶ Appeared
//!   ▲                                                                  │
//!   └────────────────── on_trip_changed (any state) ◀──────────────────┘
//! ```
//!
//! Selecting a trip fresh always shows the trip's default overview state:
//! restoration only fires on a reappearance of an already-appeared trip
//! (e.g. switching application tabs and back). A trip-id change discards any
//! in-flight restoration intent unconditionally, even when returning to a
//! previously visited trip.

use tracing::{debug, warn};

use crate::ids::{ActivityId, TripId};

use super::reference::NavigationReference;
use super::store::{KeyValueStore, NavigationStore};

/// Appearance phase of the current trip-detail presentation.
///
/// Not persisted: a process restart always starts `Fresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Appeared,
}

/// Per-trip-detail presentation session.
pub struct TripSession {
    trip_id: Option<TripId>,
    phase: Phase,
    target: Option<NavigationReference>,
}

impl Default for TripSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TripSession {
    pub fn new() -> Self {
        TripSession {
            trip_id: None,
            phase: Phase::Fresh,
            target: None,
        }
    }

    /// The trip detail view for `trip_id` was presented.
    ///
    /// A fresh presentation never auto-navigates, even if a reference is
    /// saved for the trip. Re-presenting the trip that is already appeared is
    /// a no-op.
    pub fn on_trip_presented(&mut self, trip_id: &TripId) {
        if self.trip_id.as_ref() != Some(trip_id) {
            self.reset_for(trip_id);
        }
        if self.phase == Phase::Fresh {
            debug!(trip_id = %trip_id, "First appearance, skipping restoration");
            self.target = None;
            self.phase = Phase::Appeared;
        }
    }

    /// An already-presented trip reappeared (e.g. tab switch and back).
    ///
    /// Loads the saved reference and arms the restoration target when it
    /// belongs to the current trip. A missing, malformed, or cross-trip
    /// reference leaves the target unset; storage failures do the same.
    pub fn on_trip_reappeared<S: KeyValueStore>(
        &mut self,
        store: &NavigationStore<S>,
        trip_id: &TripId,
    ) {
        if self.phase != Phase::Appeared || self.trip_id.as_ref() != Some(trip_id) {
            return;
        }

        self.target = match store.load(trip_id) {
            Ok(Some(reference)) if reference.trip_id == *trip_id => {
                debug!(trip_id = %trip_id, activity_id = %reference.activity_id, "Restoring last-viewed activity");
                Some(reference)
            }
            Ok(Some(reference)) => {
                // Stale cross-trip entry; ignored, not an error.
                warn!(
                    trip_id = %trip_id,
                    reference_trip_id = %reference.trip_id,
                    "Saved reference belongs to another trip, ignoring"
                );
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(trip_id = %trip_id, error = %e, "Could not load saved reference, skipping restoration");
                None
            }
        };
    }

    /// The active trip changed. Forces the session back to `Fresh`
    /// unconditionally, discarding any in-flight restoration intent.
    ///
    /// The outgoing trip id is tracked internally from the previous events,
    /// so callers only supply the incoming one.
    pub fn on_trip_changed(&mut self, new_trip_id: &TripId) {
        self.reset_for(new_trip_id);
    }

    /// Activity the view layer should navigate to, if restoration is armed.
    pub fn restoration_target(&self) -> Option<&ActivityId> {
        self.target.as_ref().map(|r| &r.activity_id)
    }

    fn reset_for(&mut self, trip_id: &TripId) {
        if let Some(previous) = self.trip_id.take() {
            debug!(from = %previous, to = %trip_id, "Trip changed, session reset to fresh");
        }
        self.trip_id = Some(trip_id.clone());
        self.phase = Phase::Fresh;
        self.target = None;
    }
}
