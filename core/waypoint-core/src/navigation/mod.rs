//! Navigation-State Persistence and Restoration
//!
//! Remembers which activity was last viewed under each trip and re-navigates
//! there when the trip detail view reappears.
//!
//! ```text
//! Activity viewed → NavigationReference → NavigationStore → disk
//!                                                             │
//! Trip reappears  → TripSession ── load + validate ──────────┘
//!     (view layer)      │
//!                       └─▶ restoration_target() → view navigates
//! ```
//!
//! The store is one slot per trip (no history), keyed by the trip identifier.
//! The session state machine guarantees that selecting a trip fresh shows the
//! trip overview; only a reappearance of an already-appeared trip restores.
//!
//! # Module Structure
//!
//! - [`reference`]: the durable reference value and its codec
//! - [`store`]: injected key-value backend + trip-scoped facade
//! - [`session`]: the fresh/appeared state machine
//!
//! # Key Entry Points
//!
//! - [`NavigationReference::build`]: capture "this activity was viewed"
//! - [`NavigationStore`]: save/load/clear the reference per trip
//! - [`TripSession`]: decide whether restoration should fire

mod reference;
mod session;
mod store;

pub use reference::NavigationReference;
pub use session::TripSession;
pub use store::{FileStore, InMemoryStore, KeyValueStore, NavigationStore};
