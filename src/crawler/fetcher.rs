//! Document retrieval
//!
//! The scheduler only needs `Fetcher`: something that turns a vertex id into
//! document content or fails. `HttpFetcher` is the production implementation:
//! - Building the HTTP client with user agent, timeouts and optional proxy
//! - GET requests for page content
//! - Error classification (status, content type, timeout, connection)
//!
//! There are no retries; a failed fetch is final for that vertex.

use crate::config::FetchConfig;
use async_trait::async_trait;
use reqwest::{Client, Proxy};
use std::time::Duration;
use thiserror::Error;

/// Reasons a single document could not be retrieved
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("Expected HTML, got {content_type}")]
    ContentMismatch { content_type: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Retrieval collaborator used by the scheduler
///
/// Implementations must tolerate concurrent calls.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Returns the content of the document identified by `id`
    async fn fetch(&self, id: &str) -> Result<String, FetchError>;
}

/// Builds an HTTP client from the fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Invalid proxy or TLS backend failure
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .https_only(config.https_only)
        .gzip(true)
        .brotli(true);

    if let Some(proxy_url) = &config.proxy_url {
        let mut proxy = Proxy::all(proxy_url.as_str())?;
        if let Some(username) = &config.proxy_username {
            proxy = proxy.basic_auth(username, config.proxy_password.as_deref().unwrap_or(""));
        }
        builder = builder.proxy(proxy);
    }

    builder.build()
}

/// HTTP implementation of `Fetcher`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, id: &str) -> Result<String, FetchError> {
        let response = self.client.get(id).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // A missing header is accepted; an explicit non-HTML type is not
        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !content_type.contains("html") {
                return Err(FetchError::ContentMismatch {
                    content_type: content_type.to_string(),
                });
            }
        }

        let body = response.text().await.map_err(classify)?;
        Ok(body.trim().to_string())
    }
}

fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else {
        FetchError::Network(error.to_string())
    }
}
