//! Anonymous client identity.
//!
//! There are no user accounts: the backend keys routines by a short random
//! token generated once per installation.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Storage key holding the identity token
pub const CLIENT_ID_KEY: &str = "morning_client_id";

const CLIENT_ID_LEN: usize = 8;
const CLIENT_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Opaque anonymous identifier sent with every routine request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random token
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let token = (0..CLIENT_ID_LEN)
            .map(|_| char::from(CLIENT_ID_ALPHABET[rng.random_range(0..CLIENT_ID_ALPHABET.len())]))
            .collect();
        Self(token)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Return the persisted client id, generating and storing one on first use.
///
/// Storage failures never surface: a fresh token is returned instead, which
/// means an installation with broken storage gets a new identity every run.
pub fn load_or_create_client_id(store: &impl KeyValueStore) -> ClientId {
    match store.get(CLIENT_ID_KEY) {
        Ok(Some(existing)) if !existing.trim().is_empty() => {
            return ClientId(existing.trim().to_string());
        }
        Ok(_) => {}
        Err(error) => {
            tracing::warn!("Failed to read client id, using a temporary one: {}", error);
            return ClientId::generate();
        }
    }

    let client_id = ClientId::generate();
    match store.set(CLIENT_ID_KEY, client_id.as_str()) {
        Ok(()) => tracing::info!("Generated new client id"),
        Err(error) => tracing::warn!("Failed to persist client id: {}", error),
    }
    client_id
}
