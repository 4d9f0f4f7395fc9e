//! HTTP adapter for the form backend
//!
//! Implements [`RawApiPort`] on top of reqwest. Paths handed in by services
//! are joined onto the configured base URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::config::DEFAULT_API_URL;
use crate::ports::outbound::{ApiError, RawApiPort};

/// Longest slice of an error body kept in an [`ApiError::HttpError`].
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Clone)]
pub struct ApiAdapter {
    http: Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::RequestFailed(format!("Failed to create HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn local(timeout: Duration) -> Result<Self, ApiError> {
        Self::new(DEFAULT_API_URL, timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let text = response.text().await.map_err(map_transport_error)?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::RequestFailed(err.to_string())
    }
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::read_json(response).await.map(Some)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::read_json(response).await
    }
}
