// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status mapping.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::{ApiConfig, AuthMethod};
use crate::error::ApiError;

/// HTTP client for backend calls.
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request against `path` with authentication applied.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let mut req = self.client.request(method, url);

        if let AuthMethod::Bearer { token } = &self.config.auth {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(resp),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(resp.url().path().to_string())),
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message: extract_detail(&text),
                })
            }
        }
    }

    /// Decodes a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub async fn json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Pulls the human-readable `detail` out of a FastAPI error body, falling
/// back to the raw body.
fn extract_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value.get("detail") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => body.to_string(),
        },
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail": "amount_ml must be >= 0"}"#),
            "amount_ml must be >= 0"
        );
    }

    #[test]
    fn test_extract_detail_structured() {
        let body = r#"{"detail": [{"loc": ["body", "amount_ml"], "msg": "value error"}]}"#;
        assert!(extract_detail(body).contains("value error"));
    }

    #[test]
    fn test_extract_detail_falls_back_to_body() {
        assert_eq!(extract_detail("plain text"), "plain text");
        assert_eq!(extract_detail(r#"{"error": "x"}"#), r#"{"error": "x"}"#);
    }
}
