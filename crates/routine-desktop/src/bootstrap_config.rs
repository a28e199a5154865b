//! Desktop bootstrap configuration loaded from build-time generated JSON.

use routine_core::config::ClientConfig;
use serde::{Deserialize, Serialize};

/// Build-provisioned client configuration embedded into desktop binaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesktopBootstrapConfig {
    #[serde(default)]
    pub backend_url: Option<String>,
}

impl DesktopBootstrapConfig {
    /// Resolve the runtime client config, defaulting to the local backend.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::from_backend_url(self.backend_url.clone())
    }
}

/// Loads the generated desktop bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns a default empty config so
/// the app falls back to the local development backend.
pub fn load_bootstrap_config() -> DesktopBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/desktop-bootstrap.json"));
    parse_bootstrap_config(raw)
}

fn parse_bootstrap_config(raw: &str) -> DesktopBootstrapConfig {
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse desktop bootstrap config: {}", error);
        DesktopBootstrapConfig::default()
    })
}
