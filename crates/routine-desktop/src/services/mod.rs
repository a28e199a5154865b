//! Application services
//!
//! Long-lived handles shared by every component: local preferences, the
//! backend client, and the notification sink.

mod notifier;
mod preferences;

use std::path::PathBuf;
use std::sync::Arc;

use routine_core::api::BackendClient;
use routine_core::config::ClientConfig;
use routine_core::identity::{load_or_create_client_id, ClientId};
use routine_core::session::RoutineSession;
use routine_core::storage::KeyValueStore;

pub use notifier::DesktopNotifier;

use preferences::open_preferences_store;

/// Services built once at startup and provided through context
pub struct AppServices {
    pub config: ClientConfig,
    pub client_id: ClientId,
    pub store: Arc<dyn KeyValueStore>,
    /// `None` when preferences only live in memory
    pub store_path: Option<PathBuf>,
    pub backend: BackendClient,
    pub notifier: Arc<DesktopNotifier>,
}

impl AppServices {
    pub fn initialize(config: ClientConfig) -> routine_core::Result<Self> {
        let (store, store_path) = open_preferences_store();
        let client_id = load_or_create_client_id(&store);
        let backend = BackendClient::new(config.clone())?;
        tracing::info!("Using backend at {}", backend.base_url());

        Ok(Self {
            config,
            client_id,
            store,
            store_path,
            backend,
            notifier: Arc::new(DesktopNotifier),
        })
    }

    /// Backend round trips for this client's routine
    pub fn session(&self) -> RoutineSession<BackendClient> {
        RoutineSession::new(self.backend.clone(), self.client_id.clone())
    }
}
