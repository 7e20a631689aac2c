// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use openbaby_core::{BottleFeedEvent, BreastFeedEvent, EventSink, SinkError};
use reqwest::Method;

use crate::error::ApiError;
use crate::http::HttpClient;

const BOTTLE_PATH: &str = "/events/feed/bottle";
const BREAST_PATH: &str = "/events/feed/breast";

/// Client module for feed events.
#[derive(Debug, Clone)]
pub struct FeedApi {
    http: Arc<HttpClient>,
}

impl FeedApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a new bottle feed event.
    pub async fn create_bottle(
        &self,
        event: &BottleFeedEvent,
    ) -> Result<BottleFeedEvent, ApiError> {
        tracing::debug!(amount_ml = event.amount_ml, "creating bottle feed event");
        let req = self.http.request(Method::POST, BOTTLE_PATH).json(event);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Gets a bottle feed event by id.
    pub async fn get_bottle(&self, event_id: &str) -> Result<BottleFeedEvent, ApiError> {
        let path = format!("{BOTTLE_PATH}/{event_id}");
        let req = self.http.request(Method::GET, &path);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Lists bottle feed events, most recent first.
    pub async fn list_bottle(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BottleFeedEvent>, ApiError> {
        let req = self
            .http
            .request(Method::GET, BOTTLE_PATH)
            .query(&[("limit", limit), ("offset", offset)]);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Updates an existing bottle feed event.
    pub async fn update_bottle(
        &self,
        event: &BottleFeedEvent,
    ) -> Result<BottleFeedEvent, ApiError> {
        if event.id.is_empty() {
            return Err(ApiError::MissingId);
        }
        tracing::debug!(id = %event.id, "updating bottle feed event");
        let path = format!("{BOTTLE_PATH}/{}", event.id);
        let req = self.http.request(Method::PUT, &path).json(event);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }

    /// Creates a new breastfeeding event.
    pub async fn create_breast(
        &self,
        event: &BreastFeedEvent,
    ) -> Result<BreastFeedEvent, ApiError> {
        tracing::debug!(side = %event.side, "creating breast feed event");
        let req = self.http.request(Method::POST, BREAST_PATH).json(event);
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }
}

#[async_trait]
impl EventSink<BottleFeedEvent> for FeedApi {
    async fn create(&self, payload: BottleFeedEvent) -> Result<BottleFeedEvent, SinkError> {
        self.create_bottle(&payload).await.map_err(Into::into)
    }

    async fn update(&self, payload: BottleFeedEvent) -> Result<BottleFeedEvent, SinkError> {
        self.update_bottle(&payload).await.map_err(Into::into)
    }
}

#[async_trait]
impl EventSink<BreastFeedEvent> for FeedApi {
    async fn create(&self, payload: BreastFeedEvent) -> Result<BreastFeedEvent, SinkError> {
        self.create_breast(&payload).await.map_err(Into::into)
    }

    async fn update(&self, _payload: BreastFeedEvent) -> Result<BreastFeedEvent, SinkError> {
        // The backend exposes no breast feed update endpoint.
        Err("updating breast feed events is not supported".into())
    }
}
