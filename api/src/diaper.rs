// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use openbaby_core::{DiaperEvent, EventSink, SinkError};
use reqwest::Method;

use crate::error::ApiError;
use crate::http::HttpClient;

const DIAPER_PATH: &str = "/events/diaper/";

/// Client module for diaper change events.
#[derive(Debug, Clone)]
pub struct DiaperApi {
    http: Arc<HttpClient>,
}

impl DiaperApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a new diaper change event.
    pub async fn create(&self, event: &DiaperEvent) -> Result<DiaperEvent, ApiError> {
        tracing::debug!(diaper_type = ?event.diaper_type, "creating diaper event");
        let req = self.http.request(Method::POST, DIAPER_PATH).json(event);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Gets a diaper change event by id.
    pub async fn get(&self, event_id: &str) -> Result<DiaperEvent, ApiError> {
        let path = format!("{DIAPER_PATH}{event_id}");
        let req = self.http.request(Method::GET, &path);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Lists diaper change events, most recent first.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<DiaperEvent>, ApiError> {
        let req = self
            .http
            .request(Method::GET, DIAPER_PATH)
            .query(&[("limit", limit), ("offset", offset)]);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Updates an existing diaper change event.
    pub async fn update(&self, event: &DiaperEvent) -> Result<DiaperEvent, ApiError> {
        if event.id.is_empty() {
            return Err(ApiError::MissingId);
        }
        tracing::debug!(id = %event.id, "updating diaper event");
        let path = format!("{DIAPER_PATH}{}", event.id);
        let req = self.http.request(Method::PUT, &path).json(event);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Deletes a diaper change event.
    pub async fn delete(&self, event_id: &str) -> Result<(), ApiError> {
        let path = format!("{DIAPER_PATH}{event_id}");
        let req = self.http.request(Method::DELETE, &path);
        self.http.execute(req).await?;
        Ok(())
    }
}

#[async_trait]
impl EventSink<DiaperEvent> for DiaperApi {
    async fn create(&self, payload: DiaperEvent) -> Result<DiaperEvent, SinkError> {
        DiaperApi::create(self, &payload).await.map_err(Into::into)
    }

    async fn update(&self, payload: DiaperEvent) -> Result<DiaperEvent, SinkError> {
        DiaperApi::update(self, &payload).await.map_err(Into::into)
    }
}
