//! Persisted "reminders enabled" preference

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Storage key holding the reminders flag
pub const REMINDERS_ENABLED_KEY: &str = "reminders_enabled";

/// Read the reminders flag; absent or unreadable values mean "off".
pub fn load_reminders_enabled(store: &impl KeyValueStore) -> bool {
    match store.get(REMINDERS_ENABLED_KEY) {
        Ok(Some(value)) => parse_flag(&value),
        Ok(None) => false,
        Err(error) => {
            tracing::warn!("Failed to read reminders preference: {}", error);
            false
        }
    }
}

/// Persist the reminders flag as `"true"` / `"false"`.
pub fn save_reminders_enabled(store: &impl KeyValueStore, enabled: bool) -> Result<()> {
    store.set(
        REMINDERS_ENABLED_KEY,
        if enabled { "true" } else { "false" },
    )
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
