// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Open Baby API client errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum ApiError {
    /// HTTP layer error.
    Http(String),

    /// Non-success status from the backend, with the extracted detail.
    Status {
        /// The HTTP status code.
        status: u16,
        /// The backend's `detail` message, or the raw body.
        message: String,
    },

    /// Resource not found.
    NotFound(String),

    /// Response body failed to decode.
    Decode(String),

    /// An update was attempted without an event id.
    MissingId,

    /// Configuration error.
    Config(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Status { status, message } => write!(f, "{status}: {message}"),
            Self::NotFound(what) => write!(f, "Resource not found: {what}"),
            Self::Decode(e) => write!(f, "Invalid server response: {e}"),
            Self::MissingId => write!(f, "Event ID is required"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}
