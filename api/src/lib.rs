// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the Open Baby backend.

mod client;
mod config;
mod diaper;
mod error;
mod events;
mod feed;
mod http;
mod pump;
mod stats;

pub use crate::client::Api;
pub use crate::config::{ApiConfig, AuthMethod};
pub use crate::diaper::DiaperApi;
pub use crate::error::ApiError;
pub use crate::events::EventsApi;
pub use crate::feed::FeedApi;
pub use crate::pump::PumpApi;
pub use crate::stats::{BottleFeedStatistic, StatsApi};
