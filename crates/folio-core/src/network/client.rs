//! HTTP client wrapper.
//!
//! Provides a thin wrapper around reqwest with:
//! - Configurable timeouts
//! - User-agent management
//! - Transport-error mapping into [`FolioError`]
//!
//! Status checking stays with the callers; which statuses are fatal for
//! which stage is a backend decision.

use crate::config::NetworkConfig;
use crate::{FolioError, Result};
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client used by the catalog and object-store backends.
pub struct HttpClient {
    client: Client,
    /// Default timeout for requests.
    default_timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with the default request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(NetworkConfig::REQUEST_TIMEOUT)
    }

    /// Create a new HTTP client with a custom default timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| FolioError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: Some(e.to_string()),
            })?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Get a reference to the underlying reqwest client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request with custom headers.
    pub async fn get_with_headers(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<Response> {
        let mut request = self.client.get(url);
        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        request
            .send()
            .await
            .map_err(|e| self.map_send_error("GET", url, e))
    }

    /// Make a POST request with a JSON body and custom headers.
    pub async fn post_json<T: serde::Serialize>(
        &self,
        url: &str,
        body: &T,
        headers: &[(String, String)],
    ) -> Result<Response> {
        let mut request = self.client.post(url).json(body);
        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        request
            .send()
            .await
            .map_err(|e| self.map_send_error("POST", url, e))
    }

    /// Make a POST request with a raw binary body and custom headers.
    pub async fn post_bytes(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
        headers: &[(String, String)],
    ) -> Result<Response> {
        let mut request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body);
        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        request
            .send()
            .await
            .map_err(|e| self.map_send_error("POST", url, e))
    }

    fn map_send_error(&self, verb: &str, url: &str, err: reqwest::Error) -> FolioError {
        if err.is_timeout() {
            FolioError::Timeout(self.default_timeout)
        } else {
            FolioError::Network {
                message: format!("{} {} failed: {}", verb, url, err),
                cause: Some(err.to_string()),
            }
        }
    }
}
