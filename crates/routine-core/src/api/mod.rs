//! Backend API seams.
//!
//! [`BackendClient`] talks to the real HTTP service; tests swap in an
//! in-memory implementation of the same traits.

mod http;
#[cfg(test)]
pub(crate) mod memory;

pub use http::{BackendClient, REQUEST_TIMEOUT};

use crate::error::Result;
use crate::identity::ClientId;
use crate::models::{RoutineId, RoutinePayload, StoredRoutine};

/// Trait for routine persistence operations (async)
#[allow(async_fn_in_trait)]
pub trait RoutineApi {
    /// `GET /api/routines?client_id=...`, in backend order
    async fn list_routines(&self, client_id: &ClientId) -> Result<Vec<StoredRoutine>>;

    /// `POST /api/routines`
    async fn create_routine(&self, payload: &RoutinePayload) -> Result<()>;

    /// `PUT /api/routines/{id}`
    async fn update_routine(&self, id: &RoutineId, payload: &RoutinePayload) -> Result<()>;
}

/// Trait for fetching the motivational quote (async)
#[allow(async_fn_in_trait)]
pub trait QuoteSource {
    /// `GET /api/quote`
    async fn fetch_quote(&self) -> Result<String>;
}

impl<T: RoutineApi + ?Sized> RoutineApi for &T {
    async fn list_routines(&self, client_id: &ClientId) -> Result<Vec<StoredRoutine>> {
        (**self).list_routines(client_id).await
    }

    async fn create_routine(&self, payload: &RoutinePayload) -> Result<()> {
        (**self).create_routine(payload).await
    }

    async fn update_routine(&self, id: &RoutineId, payload: &RoutinePayload) -> Result<()> {
        (**self).update_routine(id, payload).await
    }
}
