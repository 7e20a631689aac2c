// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client facade exposing one module per backend resource.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::diaper::DiaperApi;
use crate::error::ApiError;
use crate::events::EventsApi;
use crate::feed::FeedApi;
use crate::http::HttpClient;
use crate::pump::PumpApi;
use crate::stats::StatsApi;

/// Client for the Open Baby backend.
///
/// # Example
///
/// ```ignore
/// use openbaby_api::{Api, ApiConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     base_url: "http://localhost:8000".to_string(),
///     ..Default::default()
/// };
///
/// let api = Api::new(config)?;
/// let feeds = api.feed().list_bottle(10, 0).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Api {
    http: Arc<HttpClient>,
}

impl Api {
    /// Creates a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or HTTP client
    /// initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.is_empty() {
            return Err(ApiError::Config("base_url is required".to_string()));
        }
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Bottle and breast feed events.
    pub fn feed(&self) -> FeedApi {
        FeedApi::new(self.http.clone())
    }

    /// Diaper change events.
    pub fn diaper(&self) -> DiaperApi {
        DiaperApi::new(self.http.clone())
    }

    /// Pumping session events.
    pub fn pump(&self) -> PumpApi {
        PumpApi::new(self.http.clone())
    }

    /// Kind-agnostic event endpoints.
    pub fn events(&self) -> EventsApi {
        EventsApi::new(self.http.clone())
    }

    /// Statistics endpoints.
    pub fn stats(&self) -> StatsApi {
        StatsApi::new(self.http.clone())
    }
}
