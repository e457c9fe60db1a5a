//! Trip-scoped persistence for navigation references.
//!
//! The store keeps exactly one slot per trip: the key is derived from the trip
//! identifier alone, so saving a new reference for a trip overwrites the old
//! one. The backend is an injected key-value facade; production uses the
//! file-backed [`FileStore`], tests use [`InMemoryStore`].
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "navigation-state.T1": "{ ...encoded NavigationReference... }"
//!   }
//! }
//! ```
//!
//! # Defensive Design
//!
//! The container file may be missing, empty, or corrupt (a crash mid-write on
//! older app versions, a user poking at it). All of those degrade to an empty
//! store with a warning. A corrupt *value* is different: `load` surfaces
//! `MalformedReference` so the caller can decide to treat it as "no saved
//! state".
//!
//! # Atomic Writes
//!
//! Uses temp file + rename to prevent partial writes from corrupting the file.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::warn;

use crate::error::{Result, WaypointError};
use crate::ids::TripId;

use super::reference::NavigationReference;

/// Fixed prefix for navigation-state keys.
const KEY_PREFIX: &str = "navigation-state.";

/// Supported schema version of the backing file.
const STORE_VERSION: u32 = 1;

/// Derives the store key for a trip. One slot per trip, no history.
fn store_key(trip_id: &TripId) -> String {
    format!("{}{}", KEY_PREFIX, trip_id)
}

/// Synchronous, process-local key-value persistence facade.
///
/// All operations are idempotent: `set` with the same value and `remove` of a
/// missing key leave the store in the same final state without error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    /// Snapshot of all keys currently present.
    fn keys(&self) -> Result<Vec<String>>;
}

/// HashMap-backed store for tests and previews.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// The on-disk JSON structure for the backing file.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    /// Schema version. We only load files with version == 1.
    version: u32,
    /// Store key → raw value map.
    entries: HashMap<String, String>,
}

impl Default for StoreFile {
    fn default() -> Self {
        StoreFile {
            version: STORE_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// File-backed key-value store with write-through persistence.
pub struct FileStore {
    entries: HashMap<String, String>,
    file_path: PathBuf,
}

impl FileStore {
    /// Opens the store at `file_path`, reading existing entries if present.
    ///
    /// A missing file is a fresh store. An empty, corrupt, or
    /// version-incompatible file degrades to a fresh store with a warning
    /// rather than failing the app.
    pub fn open(file_path: &Path) -> Result<Self> {
        let entries = if file_path.exists() {
            let content = fs_err::read_to_string(file_path)
                .map_err(|e| WaypointError::storage("reading navigation state file", e))?;
            Self::parse_container(file_path, &content)
        } else {
            HashMap::new()
        };

        Ok(FileStore {
            entries,
            file_path: file_path.to_path_buf(),
        })
    }

    fn parse_container(file_path: &Path, content: &str) -> HashMap<String, String> {
        if content.trim().is_empty() {
            return HashMap::new();
        }
        match serde_json::from_str::<StoreFile>(content) {
            Ok(store_file) if store_file.version == STORE_VERSION => store_file.entries,
            Ok(store_file) => {
                warn!(
                    path = %file_path.display(),
                    version = store_file.version,
                    "Unsupported navigation state file version, starting empty"
                );
                HashMap::new()
            }
            Err(e) => {
                warn!(
                    path = %file_path.display(),
                    error = %e,
                    "Corrupt navigation state file, starting empty"
                );
                HashMap::new()
            }
        }
    }

    fn persist(&self) -> Result<()> {
        let store_file = StoreFile {
            version: STORE_VERSION,
            entries: self.entries.clone(),
        };
        let content = serde_json::to_string_pretty(&store_file)
            .expect("navigation state file serialization is infallible");

        let parent_dir = self.file_path.parent().ok_or_else(|| {
            WaypointError::storage(
                "navigation state file path has no parent directory",
                std::io::Error::from(std::io::ErrorKind::NotFound),
            )
        })?;
        fs_err::create_dir_all(parent_dir)
            .map_err(|e| WaypointError::storage("creating storage directory", e))?;

        let mut temp_file = NamedTempFile::new_in(parent_dir)
            .map_err(|e| WaypointError::storage("creating temp state file", e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| WaypointError::storage("writing temp state file", e))?;
        temp_file
            .flush()
            .map_err(|e| WaypointError::storage("flushing temp state file", e))?;
        temp_file
            .persist(&self.file_path)
            .map_err(|e| WaypointError::storage("replacing navigation state file", e.error))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// Trip-scoped facade over a [`KeyValueStore`], speaking
/// [`NavigationReference`]s instead of raw strings.
pub struct NavigationStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> NavigationStore<S> {
    pub fn new(backend: S) -> Self {
        NavigationStore { backend }
    }

    /// Saves `reference` as the last-viewed activity for `trip_id`,
    /// overwriting any previous entry for that trip.
    ///
    /// Rejects with `OwnershipMismatch` if the reference was built for a
    /// different trip; a slot must never hold a reference that contradicts
    /// its own key.
    pub fn save(&mut self, trip_id: &TripId, reference: &NavigationReference) -> Result<()> {
        if reference.trip_id != *trip_id {
            return Err(WaypointError::OwnershipMismatch {
                activity_id: reference.activity_id.clone(),
                owner: reference.trip_id.clone(),
                expected: trip_id.clone(),
            });
        }
        self.backend.set(&store_key(trip_id), &reference.encode())
    }

    /// Returns the saved reference for `trip_id`, or `None` if no entry
    /// exists.
    ///
    /// A corrupt stored value surfaces `MalformedReference` rather than being
    /// silently swallowed; callers decide whether to treat it as absent.
    pub fn load(&self, trip_id: &TripId) -> Result<Option<NavigationReference>> {
        match self.backend.get(&store_key(trip_id))? {
            Some(raw) => NavigationReference::decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Removes the entry for `trip_id`. A no-op if none exists.
    pub fn clear(&mut self, trip_id: &TripId) -> Result<()> {
        self.backend.remove(&store_key(trip_id))
    }

    /// All decodable saved references, in no particular order.
    ///
    /// Malformed entries are skipped with a warning; this is a diagnostic
    /// surface (used by `nav-check`), not the restoration path.
    pub fn all_references(&self) -> Result<Vec<NavigationReference>> {
        let mut references = Vec::new();
        for key in self.backend.keys()? {
            if !key.starts_with(KEY_PREFIX) {
                continue;
            }
            let Some(raw) = self.backend.get(&key)? else {
                continue;
            };
            match NavigationReference::decode(&raw) {
                Ok(reference) => references.push(reference),
                Err(e) => warn!(key = %key, error = %e, "Skipping malformed navigation reference"),
            }
        }
        Ok(references)
    }
}
