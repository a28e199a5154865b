//! In-memory backend used by session and editor tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use super::{QuoteSource, RoutineApi};
use crate::error::{Error, Result};
use crate::identity::ClientId;
use crate::models::{RoutineId, RoutinePayload, StoredRoutine};

/// Stores routines like the real service: ids are assigned on create and
/// listing filters by client id.
#[derive(Debug, Default)]
pub struct MemoryRoutineApi {
    routines: Mutex<Vec<StoredRoutine>>,
    quote: Option<String>,
    next_id: AtomicUsize,
    pub fail_requests: bool,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
}

impl MemoryRoutineApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(quote: impl Into<String>) -> Self {
        Self {
            quote: Some(quote.into()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_requests: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<StoredRoutine> {
        self.routines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn insert(&self, routine: StoredRoutine) {
        self.routines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(routine);
    }

    fn check_available(&self) -> Result<()> {
        if self.fail_requests {
            Err(Error::Api {
                status: 503,
                message: "backend unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

fn to_stored(id: RoutineId, payload: &RoutinePayload) -> StoredRoutine {
    StoredRoutine {
        id,
        client_id: Some(payload.client_id.clone()),
        title: payload.title.clone(),
        wake_time: payload.wake_time,
        reminders_enabled: payload.reminders_enabled,
        days: Some(payload.days.clone()),
        tasks: Some(payload.tasks.clone()),
    }
}

impl RoutineApi for MemoryRoutineApi {
    async fn list_routines(&self, client_id: &ClientId) -> Result<Vec<StoredRoutine>> {
        self.check_available()?;
        Ok(self
            .stored()
            .into_iter()
            .filter(|routine| routine.client_id.as_ref() == Some(client_id))
            .collect())
    }

    async fn create_routine(&self, payload: &RoutinePayload) -> Result<()> {
        self.check_available()?;
        self.creates.fetch_add(1, Ordering::SeqCst);
        let id = RoutineId::new(format!(
            "routine-{}",
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1
        ));
        self.insert(to_stored(id, payload));
        Ok(())
    }

    async fn update_routine(&self, id: &RoutineId, payload: &RoutinePayload) -> Result<()> {
        self.check_available()?;
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut routines = self.routines.lock().unwrap_or_else(PoisonError::into_inner);
        let existing = routines
            .iter_mut()
            .find(|routine| &routine.id == id)
            .ok_or_else(|| Error::Api {
                status: 404,
                message: format!("routine {id} not found"),
            })?;
        *existing = to_stored(id.clone(), payload);
        Ok(())
    }
}

impl QuoteSource for MemoryRoutineApi {
    async fn fetch_quote(&self) -> Result<String> {
        self.check_available()?;
        self.quote.clone().ok_or_else(|| Error::Api {
            status: 404,
            message: "no quote".to_string(),
        })
    }
}
