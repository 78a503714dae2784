//! HTTP client: request dispatch and response classification
//!
//! Executes one request per invocation and classifies the outcome into
//! either a deserialized JSON mapping or a typed error. The client performs
//! no retries; timeouts and rate limits surface as distinct error variants
//! so callers can decide what to do with them.

use super::rate_limit::RateLimitInfo;
use crate::auth::{AuthScheme, Credentials};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Method};
use reqwest::{Client, Response};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Fixed mapping from known status codes to canned messages, checked after
/// the rate limit detection and before the 400/generic fallbacks.
const KNOWN_STATUS_MESSAGES: &[(u16, &str)] = &[
    (401, "Unauthorized"),
    (403, "Forbidden!"),
    (404, "Not found."),
    (409, "Conflict"),
    (429, "Under pressure! (Too many requests)"),
    (500, "You broke it!!!"),
    (502, "Server not reachable."),
    (503, "Server under maintenance."),
];

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection configuration, immutable after construction
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all request paths are joined against
    pub base_url: String,
    /// Credentials applied to every request
    pub credentials: Credentials,
    /// Default timeout, overridable per request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: String,
    token: String,
    scheme: AuthScheme,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the authentication token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Set the authorization scheme (defaults to JWT)
    pub fn auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the default request timeout (defaults to 10 seconds)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        Url::parse(&self.base_url)?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(Error::config("timeout must be positive"));
        }

        Ok(ClientConfig {
            base_url: self.base_url,
            credentials: Credentials::new(self.scheme, self.token),
            timeout,
        })
    }
}

/// Configuration for a single request, built per call
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Header overrides, merged on top of the defaults
    pub headers: HashMap<String, String>,
    /// Query parameters
    pub query: HashMap<String, String>,
    /// Request body; only sent for POST/PATCH
    pub body: Option<JsonValue>,
    /// Override the client's default timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create an empty request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header override
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set a raw JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize a model into the request body as its plain field mapping
    pub fn body<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Set a per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Generic request handler.
///
/// Owns the connection configuration and performs one HTTP call per
/// invocation. Configuration is read-only after construction and no response
/// state is shared between calls, so a single instance is safe to use from
/// concurrent call sites.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client from a validated config
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// The connection configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, path: &str, config: RequestConfig) -> Result<JsonObject> {
        self.request(Method::Get, path, config).await
    }

    /// Make a POST request
    pub async fn post(&self, path: &str, config: RequestConfig) -> Result<JsonObject> {
        self.request(Method::Post, path, config).await
    }

    /// Make a PATCH request
    pub async fn patch(&self, path: &str, config: RequestConfig) -> Result<JsonObject> {
        self.request(Method::Patch, path, config).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str, config: RequestConfig) -> Result<JsonObject> {
        self.request(Method::Delete, path, config).await
    }

    /// Execute a single request and classify the outcome.
    ///
    /// On a 2xx status the parsed JSON body is returned as a mapping (an
    /// empty mapping for an empty body). Every other outcome is a distinct
    /// [`Error`] variant; see the classification in [`classify_response`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<JsonObject> {
        let url = self.build_url(path);
        let timeout = config.timeout.unwrap_or(self.config.timeout);
        if timeout.is_zero() {
            return Err(Error::config("timeout must be positive"));
        }

        debug!(%method, %url, "dispatching request");

        // The transport handle is scoped to this call: dropped on return,
        // releasing the connection.
        let client = Client::builder()
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;

        let mut req = client.request(method.into(), &url).timeout(timeout);

        // Defaults first, caller overrides on top, Authorization last.
        let mut headers: HashMap<String, String> = HashMap::new();
        headers.insert("Content-Type".into(), "application/json".into());
        headers.extend(config.headers);
        if let Some(value) = self.config.credentials.header_value() {
            headers.insert("Authorization".into(), value);
        }
        for (key, value) in &headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if method.has_body() {
            let body = config
                .body
                .unwrap_or_else(|| JsonValue::Object(JsonObject::new()));
            req = req.json(&body);
        }

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => return Err(classify_transport_error(&e)),
        };

        classify_response(response).await
    }

    /// Join a path against the base URL. Absolute URLs pass through
    /// untouched.
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

/// Map a transport failure onto the error taxonomy. Timeouts come first so
/// they are never swallowed by the generic transport variant.
fn classify_transport_error(e: &reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else if e.is_connect() {
        Error::ServerUnreachable
    } else {
        Error::transport(e.to_string())
    }
}

/// Classify a received response, strictly in this order: 2xx parse, rate
/// limit exhaustion, known-status table, 400 special case, generic fallback.
async fn classify_response(response: Response) -> Result<JsonObject> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return Err(Error::transport(e.to_string())),
    };

    if status.is_success() {
        if body.is_empty() {
            return Ok(JsonObject::new());
        }
        return serde_json::from_str::<JsonObject>(&body).map_err(|_| Error::ResponseParse {
            status: status.as_u16(),
            body,
        });
    }

    let status = status.as_u16();
    debug!(status, "classifying error response");

    // Rate limit exhaustion preempts the known-status table; a 429 with
    // zero remaining quota must not surface as the table's canned message.
    if let Some(info) = RateLimitInfo::from_headers(&headers) {
        if info.is_exhausted() {
            return Err(Error::RateLimitExceeded { info, status, body });
        }
    }

    if let Some(&(_, message)) = KNOWN_STATUS_MESSAGES.iter().find(|&&(code, _)| code == status) {
        return Err(Error::KnownStatus {
            status,
            message,
            body,
        });
    }

    if status == 400 {
        let message =
            extract_field(&body, "error").unwrap_or_else(|| "Bad Request.".to_string());
        return Err(Error::BadRequest {
            status,
            message,
            body,
        });
    }

    let message = extract_field(&body, "message").unwrap_or_else(|| "Unknown error.".to_string());
    Err(Error::Http {
        status,
        message,
        body,
    })
}

/// Pull a string field out of a JSON error body, if the body parses at all
fn extract_field(body: &str, field: &str) -> Option<String> {
    let value: JsonValue = serde_json::from_str(body).ok()?;
    match value.get(field)? {
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
