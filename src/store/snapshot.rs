// LinkVault snapshot store
// Loads and saves the full bookmark collection as a JSON file at the
// platform-specific config path. Last-write-wins; there is only one writer.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// File name of the collection snapshot under the config directory.
pub const SNAPSHOT_FILE_NAME: &str = "bookmarks.json";

/// Trait defining the snapshot store interface.
pub trait SnapshotStoreTrait {
    fn load(&self) -> Vec<Bookmark>;
    fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError>;
    fn path(&self) -> &str;
}

/// Snapshot store that persists the collection as JSON on disk.
pub struct SnapshotStore {
    snapshot_path: String,
}

impl SnapshotStore {
    /// Creates a new SnapshotStore.
    ///
    /// If `path_override` is `Some`, uses that path for the snapshot file.
    /// Otherwise, uses the platform-specific config directory with
    /// `bookmarks.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let snapshot_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join(SNAPSHOT_FILE_NAME)
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self { snapshot_path }
    }
}

impl SnapshotStoreTrait for SnapshotStore {
    /// Loads the bookmark collection from the snapshot file.
    ///
    /// A missing file yields an empty collection. An unreadable or
    /// malformed snapshot also yields an empty collection with a logged
    /// warning; loading never fails out of the caller.
    fn load(&self) -> Vec<Bookmark> {
        let path = Path::new(&self.snapshot_path);

        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.snapshot_path, error = %e, "Failed to read snapshot");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                tracing::warn!(path = %self.snapshot_path, error = %e, "Failed to parse snapshot");
                Vec::new()
            }
        }
    }

    /// Saves the bookmark collection to the snapshot file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        let path = Path::new(&self.snapshot_path);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::IoError(format!("Failed to create snapshot directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(bookmarks).map_err(|e| {
            StoreError::SerializationError(format!("Failed to serialize collection: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| StoreError::IoError(format!("Failed to write snapshot: {}", e)))?;

        Ok(())
    }

    /// Returns the path to the snapshot file.
    fn path(&self) -> &str {
        &self.snapshot_path
    }
}
