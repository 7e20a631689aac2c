// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::HttpClient;

const FEED_STATS_PATH: &str = "/stats/feeds";

/// One bottle-feed data point from `/stats/feeds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleFeedStatistic {
    /// When the feed happened.
    pub time: DateTime<Utc>,

    /// Amount fed in milliliters.
    pub amount_ml: f64,

    /// Minutes elapsed since the previous feed.
    pub time_since_last_feed_minutes: f64,
}

/// Client module for statistics.
#[derive(Debug, Clone)]
pub struct StatsApi {
    http: Arc<HttpClient>,
}

impl StatsApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Retrieves bottle feed statistics, optionally bounded by start/end.
    pub async fn feed_stats(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<BottleFeedStatistic>, ApiError> {
        let mut req = self.http.request(Method::GET, FEED_STATS_PATH);
        if let Some(start) = start {
            req = req.query(&[("start_date", start.to_rfc3339())]);
        }
        if let Some(end) = end {
            req = req.query(&[("end_date", end.to_rfc3339())]);
        }
        let resp = self.http.execute(req).await?;
        HttpClient::json(resp).await
    }
}
