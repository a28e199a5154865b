//! Location of the desktop preferences file

use std::path::PathBuf;
use std::sync::Arc;

use routine_core::storage::{JsonFileStore, KeyValueStore, MemoryStore};

const PREFERENCES_FILE: &str = "preferences.json";

/// Get the default preferences path
fn default_preferences_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("morning-routine")
        .join(PREFERENCES_FILE)
}

/// Open the on-disk preferences store.
///
/// Falls back to an in-memory store when the data directory is unusable; the
/// app keeps working but forgets its identity on restart.
pub fn open_preferences_store() -> (Arc<dyn KeyValueStore>, Option<PathBuf>) {
    let path = default_preferences_path();
    match JsonFileStore::open(&path) {
        Ok(store) => {
            tracing::debug!("Preferences stored at {}", path.display());
            (Arc::new(store), Some(path))
        }
        Err(error) => {
            tracing::warn!(
                "Failed to open preferences at {}: {}. Using in-memory preferences.",
                path.display(),
                error
            );
            (Arc::new(MemoryStore::new()), None)
        }
    }
}
