// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use openbaby_core::{EventSink, PumpEvent, SinkError};
use reqwest::Method;

use crate::error::ApiError;
use crate::http::HttpClient;

const PUMP_PATH: &str = "/events/pump/";

/// Client module for pumping session events.
#[derive(Debug, Clone)]
pub struct PumpApi {
    http: Arc<HttpClient>,
}

impl PumpApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a new pump event.
    pub async fn create(&self, event: &PumpEvent) -> Result<PumpEvent, ApiError> {
        tracing::debug!(amount_ml = event.amount_ml, "creating pump event");
        let req = self.http.request(Method::POST, PUMP_PATH).json(event);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Gets a pump event by id.
    pub async fn get(&self, event_id: &str) -> Result<PumpEvent, ApiError> {
        let path = format!("{PUMP_PATH}{event_id}");
        let req = self.http.request(Method::GET, &path);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Lists pump events, most recent first.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<PumpEvent>, ApiError> {
        let req = self
            .http
            .request(Method::GET, PUMP_PATH)
            .query(&[("limit", limit), ("offset", offset)]);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Updates an existing pump event.
    pub async fn update(&self, event: &PumpEvent) -> Result<PumpEvent, ApiError> {
        if event.id.is_empty() {
            return Err(ApiError::MissingId);
        }
        tracing::debug!(id = %event.id, "updating pump event");
        let path = format!("{PUMP_PATH}{}", event.id);
        let req = self.http.request(Method::PUT, &path).json(event);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Deletes a pump event.
    pub async fn delete(&self, event_id: &str) -> Result<(), ApiError> {
        let path = format!("{PUMP_PATH}{event_id}");
        let req = self.http.request(Method::DELETE, &path);
        self.http.execute(req).await?;
        Ok(())
    }
}

#[async_trait]
impl EventSink<PumpEvent> for PumpApi {
    async fn create(&self, payload: PumpEvent) -> Result<PumpEvent, SinkError> {
        PumpApi::create(self, &payload).await.map_err(Into::into)
    }

    async fn update(&self, payload: PumpEvent) -> Result<PumpEvent, SinkError> {
        PumpApi::update(self, &payload).await.map_err(Into::into)
    }
}
