//! Client configuration.
//!
//! The backend base URL is provisioned at build time. Missing or malformed
//! values fall back to the local development backend.

use serde::{Deserialize, Serialize};

use crate::util::{is_http_url, normalize_text_option};

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Resolved client configuration shared by every interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Builds a config from a raw (possibly absent) backend URL.
    pub fn from_backend_url(raw: Option<String>) -> Self {
        Self {
            backend_url: resolve_backend_url(raw),
        }
    }

    /// `GET` endpoint returning `{ "quote": "..." }`.
    pub fn quote_endpoint(&self) -> String {
        format!("{}/api/quote", self.backend_url)
    }

    /// Collection endpoint for listing and creating routines.
    pub fn routines_endpoint(&self) -> String {
        format!("{}/api/routines", self.backend_url)
    }

    /// Item endpoint for updating a stored routine.
    pub fn routine_endpoint(&self, routine_id: &str) -> String {
        format!("{}/api/routines/{routine_id}", self.backend_url)
    }
}

/// Normalizes a configured backend URL, falling back to [`DEFAULT_BACKEND_URL`].
pub fn resolve_backend_url(raw: Option<String>) -> String {
    let Some(value) = normalize_text_option(raw) else {
        return DEFAULT_BACKEND_URL.to_string();
    };

    if is_http_url(&value) {
        value.trim_end_matches('/').to_string()
    } else {
        tracing::warn!(
            "Ignoring backend URL without http:// or https:// scheme: {}",
            value
        );
        DEFAULT_BACKEND_URL.to_string()
    }
}
