// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use chrono::{DateTime, Utc};
use openbaby_core::Event;
use reqwest::Method;

use crate::error::ApiError;
use crate::http::HttpClient;

const EVENTS_PATH: &str = "/events/";

/// Client module for the kind-agnostic event endpoints.
#[derive(Debug, Clone)]
pub struct EventsApi {
    http: Arc<HttpClient>,
}

impl EventsApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a new event.
    pub async fn create(&self, event: &Event) -> Result<Event, ApiError> {
        let req = self.http.request(Method::POST, EVENTS_PATH).json(event);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Gets an event by id.
    pub async fn get(&self, event_id: &str) -> Result<Event, ApiError> {
        let path = format!("{EVENTS_PATH}{event_id}");
        let req = self.http.request(Method::GET, &path);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Lists events of every kind, optionally bounded by start/end instants.
    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<Event>, ApiError> {
        let mut req = self
            .http
            .request(Method::GET, EVENTS_PATH)
            .query(&[("limit", limit), ("offset", offset)]);
        if let Some(start) = start_time {
            req = req.query(&[("start_time", start.to_rfc3339())]);
        }
        if let Some(end) = end_time {
            req = req.query(&[("end_time", end.to_rfc3339())]);
        }
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Updates an existing event.
    pub async fn update(&self, event: &Event) -> Result<Event, ApiError> {
        if event.id.is_empty() {
            return Err(ApiError::MissingId);
        }
        let path = format!("{EVENTS_PATH}{}", event.id);
        let req = self.http.request(Method::PUT, &path).json(event);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Deletes an event.
    pub async fn delete(&self, event_id: &str) -> Result<(), ApiError> {
        let path = format!("{EVENTS_PATH}{event_id}");
        let req = self.http.request(Method::DELETE, &path);
        self.http.execute(req).await?;
        Ok(())
    }
}
