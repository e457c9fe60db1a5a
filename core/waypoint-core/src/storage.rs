//! Storage configuration and path management for Waypoint.
//!
//! Centralizes every on-disk path the core library touches. Production code
//! uses `StorageConfig::default()` which points to `~/.waypoint/`; tests inject
//! a temp directory via `StorageConfig::with_root()`.

use std::path::{Path, PathBuf};

/// Central configuration for all Waypoint storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for all Waypoint data (default: ~/.waypoint)
    root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let home = dirs::home_dir().expect("Could not find home directory");
        Self {
            root: home.join(".waypoint"),
        }
    }
}

impl StorageConfig {
    /// Creates a StorageConfig with a custom root directory.
    /// Used for testing with temp directories.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Returns the root directory for Waypoint data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to navigation-state.json (last-viewed activity per trip).
    pub fn navigation_state_file(&self) -> PathBuf {
        self.root.join("navigation-state.json")
    }

    /// Path to trips.json (the trip/activity object graph snapshot).
    ///
    /// Reserved for the entity store the UI shells own; this library only
    /// hands out the path so every client agrees on the layout.
    pub fn trips_file(&self) -> PathBuf {
        self.root.join("trips.json")
    }

    /// Path to attachments/ directory (copied attachment files).
    pub fn attachments_dir(&self) -> PathBuf {
        self.root.join("attachments")
    }

    /// Ensures the root directory and standard subdirectories exist.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        fs_err::create_dir_all(&self.root)?;
        fs_err::create_dir_all(self.attachments_dir())?;
        Ok(())
    }
}
