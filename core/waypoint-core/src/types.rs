//! Core entity types shared across all Waypoint clients.
//!
//! These types are the lingua franca of the Waypoint ecosystem: the Swift and
//! Kotlin shells render them, the navigation layer references them. Kind → icon
//! and kind → editable-field mappings live here as explicit tables so view
//! code never branches on activity kind directly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ActivityId, TripId};

// ═══════════════════════════════════════════════════════════════════════════════
// Activity Kind
// ═══════════════════════════════════════════════════════════════════════════════

/// Closed set of activity kinds a trip can contain.
///
/// The wire tags (`"activity"`, `"lodging"`, `"transportation"`) are part of
/// the persisted navigation-reference format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Generic scheduled activity (tour, dinner reservation, ...).
    Activity,
    Lodging,
    Transportation,
}

/// Fields the edit form exposes, per activity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Dates,
    Location,
    CheckInOut,
    TransportMode,
    Notes,
}

impl ActivityKind {
    /// Default icon for the kind (SF Symbols names, shared with the clients).
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Activity => "calendar",
            ActivityKind::Lodging => "bed.double",
            ActivityKind::Transportation => "airplane",
        }
    }

    /// Fields the edit form shows for this kind.
    pub fn editable_fields(&self) -> &'static [FieldKind] {
        match self {
            ActivityKind::Activity => &[
                FieldKind::Name,
                FieldKind::Dates,
                FieldKind::Location,
                FieldKind::Notes,
            ],
            ActivityKind::Lodging => &[
                FieldKind::Name,
                FieldKind::Dates,
                FieldKind::Location,
                FieldKind::CheckInOut,
                FieldKind::Notes,
            ],
            ActivityKind::Transportation => &[
                FieldKind::Name,
                FieldKind::Dates,
                FieldKind::Location,
                FieldKind::TransportMode,
                FieldKind::Notes,
            ],
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Transport Mode
// ═══════════════════════════════════════════════════════════════════════════════

/// Mode of travel for transportation activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Plane,
    Train,
    Boat,
    Car,
    Bus,
}

impl TransportMode {
    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Plane => "airplane",
            TransportMode::Train => "tram",
            TransportMode::Boat => "ferry",
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Entities
// ═══════════════════════════════════════════════════════════════════════════════

/// Top-level container entity owning a set of activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Trip {
    pub fn new(name: impl Into<String>) -> Self {
        Trip {
            id: TripId::generate(),
            name: name.into(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn id(&self) -> &TripId {
        &self.id
    }
}

/// A file attached to an activity (booking confirmation, ticket, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub added_at: DateTime<Utc>,
}

/// A scheduled item under a trip; one of three kinds.
///
/// Activities are owned by exactly one trip and carry a back-reference to the
/// owner's identifier for validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub trip_id: TripId,
    pub kind: ActivityKind,
    pub name: String,
    /// Only meaningful for `ActivityKind::Transportation`.
    #[serde(default)]
    pub transport_mode: Option<TransportMode>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Activity {
    pub fn new(trip: &Trip, kind: ActivityKind, name: impl Into<String>) -> Self {
        Activity {
            id: ActivityId::generate(),
            trip_id: trip.id.clone(),
            kind,
            name: name.into(),
            transport_mode: None,
            attachments: Vec::new(),
        }
    }

    pub fn id(&self) -> &ActivityId {
        &self.id
    }

    /// Identifier of the trip that owns this activity.
    pub fn owner_trip_id(&self) -> &TripId {
        &self.trip_id
    }

    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Icon to display for this activity.
    ///
    /// Transportation activities resolve through their mode. While editing, an
    /// unset mode shows a placeholder so the user sees the field is incomplete;
    /// while viewing it falls back to the kind's default icon.
    pub fn display_icon(&self, editing: bool) -> &'static str {
        match (self.kind, self.transport_mode) {
            (ActivityKind::Transportation, Some(mode)) => mode.icon(),
            (ActivityKind::Transportation, None) if editing => "questionmark.circle",
            (kind, _) => kind.icon(),
        }
    }

    /// Whether the attachments section is visible in the detail view.
    ///
    /// Editing always shows the section (so files can be added); viewing shows
    /// it only when there is something to see.
    pub fn shows_attachment_section(&self, editing: bool) -> bool {
        editing || !self.attachments.is_empty()
    }
}
