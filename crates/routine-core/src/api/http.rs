//! reqwest implementation of the backend API

use std::time::Duration;

use serde::Deserialize;

use super::{QuoteSource, RoutineApi};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::identity::ClientId;
use crate::models::{RoutineId, RoutinePayload, StoredRoutine};
use crate::util::compact_text;

/// Upper bound for any single backend request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Morning Routine backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: ClientConfig,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    quote: String,
}

impl BackendClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.config.backend_url
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status,
            message: compact_text(&body),
        })
    }
}

impl QuoteSource for BackendClient {
    async fn fetch_quote(&self) -> Result<String> {
        let response = self
            .client
            .get(self.config.quote_endpoint())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let payload = Self::ensure_success(response)
            .await?
            .json::<QuoteResponse>()
            .await?;
        Ok(payload.quote)
    }
}

impl RoutineApi for BackendClient {
    async fn list_routines(&self, client_id: &ClientId) -> Result<Vec<StoredRoutine>> {
        let response = self
            .client
            .get(self.config.routines_endpoint())
            .query(&[("client_id", client_id.as_str())])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let routines = Self::ensure_success(response)
            .await?
            .json::<Vec<StoredRoutine>>()
            .await?;
        tracing::debug!("Fetched {} routine(s) for client", routines.len());
        Ok(routines)
    }

    async fn create_routine(&self, payload: &RoutinePayload) -> Result<()> {
        let response = self
            .client
            .post(self.config.routines_endpoint())
            .json(payload)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        tracing::info!("Created routine with {} task(s)", payload.tasks.len());
        Ok(())
    }

    async fn update_routine(&self, id: &RoutineId, payload: &RoutinePayload) -> Result<()> {
        let response = self
            .client
            .put(self.config.routine_endpoint(id.as_str()))
            .json(payload)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        tracing::info!("Updated routine {} with {} task(s)", id, payload.tasks.len());
        Ok(())
    }
}
