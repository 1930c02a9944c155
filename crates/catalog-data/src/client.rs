//! HTTP client for the catalog backend.

use catalog_model::{CatalogError, CatalogResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::GatewayConfig;

/// Longest upstream error body carried into an error message.
const MAX_ERROR_BODY: usize = 512;

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
}

impl FetchClient {
    /// Build a client from configuration.
    pub fn new(config: &GatewayConfig) -> CatalogResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Create a GET request.
    pub fn get(&self, path: &str) -> ClientRequestBuilder {
        self.request(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(&self, path: &str) -> ClientRequestBuilder {
        self.request(Method::POST, path)
    }

    /// Create a PUT request.
    pub fn put(&self, path: &str) -> ClientRequestBuilder {
        self.request(Method::PUT, path)
    }

    /// Create a PATCH request.
    pub fn patch(&self, path: &str) -> ClientRequestBuilder {
        self.request(Method::PATCH, path)
    }

    /// Create a DELETE request.
    pub fn delete(&self, path: &str) -> ClientRequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, path: &str) -> ClientRequestBuilder {
        let url = self.url(path);
        let inner = self.http.request(method.clone(), &url);
        ClientRequestBuilder { method, url, inner }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    method: Method,
    url: String,
    inner: reqwest::RequestBuilder,
}

impl ClientRequestBuilder {
    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.inner = self.inner.json(body);
        self
    }

    /// Send the request and buffer the response body.
    ///
    /// Only connection-level failures are errors here; status handling is
    /// left to [`Response::error_for_status`].
    pub async fn send(self) -> CatalogResult<Response> {
        let Self { method, url, inner } = self;
        debug!(%method, %url, "sending catalog request");

        let response = inner.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "catalog request failed");
            CatalogError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!(%method, %url, error = %e, "failed to read catalog response body");
            CatalogError::Transport(e.to_string())
        })?;

        debug!(%method, %url, status = status.as_u16(), bytes = body.len(), "catalog response received");
        Ok(Response::new(status.as_u16(), url, body.to_vec()))
    }
}

/// A buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The URL that produced this response.
    pub url: String,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            url: url.into(),
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> CatalogResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            warn!(url = %self.url, error = %e, "malformed catalog response");
            CatalogError::Decode(format!("{}: {}", self.url, e))
        })
    }

    /// Convert to a Result, mapping 404 to `NotFound` and any other non-2xx
    /// status to `Http`.
    pub fn error_for_status(self) -> CatalogResult<Self> {
        if self.is_success() {
            return Ok(self);
        }

        warn!(url = %self.url, status = self.status, "catalog backend returned an error status");
        if self.status == StatusCode::NOT_FOUND.as_u16() {
            return Err(CatalogError::NotFound(self.url));
        }

        let mut message = self.text().trim().to_string();
        if message.is_empty() {
            message = StatusCode::from_u16(self.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unknown status")
                .to_string();
        }
        if message.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            message.truncate(cut);
        }

        Err(CatalogError::Http {
            status: self.status,
            message,
        })
    }
}
