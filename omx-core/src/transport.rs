//! HTTP transport seam.
//!
//! The REST client talks to the server through [`HttpTransport`], so tests can
//! substitute [`crate::mock::MockTransport`] for the reqwest implementation.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::{ClientConfig, ServerConfig};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// Raw status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for the HTTP round trip behind every REST call.
///
/// An `Err` means the request never produced a response (connection refused,
/// timeout, TLS failure); HTTP error statuses are returned as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, String>;
    async fn get(&self, url: &str) -> Result<HttpReply, String>;
}

/// Real transport using reqwest.
pub struct ReqwestTransport {
    client: reqwest::Client,
    basic_auth: Option<(String, String)>,
}

impl ReqwestTransport {
    pub fn new(server: &ServerConfig, client: &ClientConfig) -> Result<Self, ConfigError> {
        let basic_auth = match &server.basic_auth_user {
            Some(user) => Some((user.clone(), server.password()?)),
            None => None,
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(client.timeout_secs))
            .danger_accept_invalid_certs(client.accept_invalid_certs)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self {
            client: http,
            basic_auth,
        })
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.basic_auth {
            Some((user, password)) => req.basic_auth(user, Some(password)),
            None => req,
        }
    }

    async fn finish(resp: reqwest::Response) -> Result<HttpReply, String> {
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))?;
        Ok(HttpReply { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, String> {
        debug!(url = %url, "POST");
        let resp = self
            .authed(self.client.post(url))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        Self::finish(resp).await
    }

    async fn get(&self, url: &str) -> Result<HttpReply, String> {
        debug!(url = %url, "GET");
        let resp = self
            .authed(self.client.get(url))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        Self::finish(resp).await
    }
}
