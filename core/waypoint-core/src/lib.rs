//! # waypoint-core
//!
//! Core library for Waypoint, providing shared trip-planning logic for all
//! clients (Swift mobile app, Kotlin mobile app, desktop shell).
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. Clients can wrap with async if needed.
//! - **Not thread-safe**: Everything runs on the UI-owning execution context;
//!   clients provide their own synchronization if they stray from it.
//! - **Graceful degradation**: Corrupt or missing persisted state degrades to
//!   defaults (restoration is skipped, never a crash or a user-visible error).
//! - **Single source of truth**: All clients share these types and logic.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waypoint_core::{FileStore, NavigationReference, NavigationStore, TripSession};
//!
//! let mut store = NavigationStore::new(FileStore::open(&path)?);
//! store.save(trip.id(), &NavigationReference::build(&activity, trip.id())?)?;
//!
//! let mut session = TripSession::new();
//! session.on_trip_presented(trip.id());
//! session.on_trip_reappeared(&store, trip.id());
//! if let Some(activity_id) = session.restoration_target() {
//!     // navigate to activity_id
//! }
//! ```

// Public modules
pub mod error;
pub mod ids;
pub mod navigation;
pub mod storage;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{Result, WaypointError};
pub use ids::{ActivityId, TripId};
pub use navigation::{
    FileStore, InMemoryStore, KeyValueStore, NavigationReference, NavigationStore, TripSession,
};
pub use storage::StorageConfig;
pub use types::{Activity, ActivityKind, Attachment, FieldKind, TransportMode, Trip};
