//! Error types for the paperlink SDK
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Variants derived from an HTTP response carry the raw status code and body
//! so callers can branch on them when the taxonomy is not specific enough.

use crate::http::RateLimitInfo;
use thiserror::Error;

/// The main error type for the paperlink SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Request Dispatch Errors
    // ============================================================================
    /// The caller passed a method outside the supported set. Raised at the
    /// boundary, before any network interaction.
    #[error("Unsupported method: {method}")]
    UnsupportedMethod { method: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Transport-level timeout. Whether to retry is the caller's decision.
    #[error("Request timed out")]
    Timeout,

    #[error("Server not reachable.")]
    ServerUnreachable,

    #[error("Unknown transport error: {message}")]
    Transport { message: String },

    // ============================================================================
    // Response Classification Errors
    // ============================================================================
    /// A 2xx response whose body was not a valid JSON object.
    #[error("Error while parsing server response (HTTP {status})")]
    ResponseParse { status: u16, body: String },

    /// The server reported an exhausted request quota via `X-Ratelimit-*`
    /// headers. Checked before the known-status table.
    #[error("Rate limit exceeded, retry after {}s", .info.retry)]
    RateLimitExceeded {
        info: RateLimitInfo,
        status: u16,
        body: String,
    },

    /// Status code matched the fixed known-status table.
    #[error("{message}")]
    KnownStatus {
        status: u16,
        message: &'static str,
        body: String,
    },

    /// HTTP 400 not otherwise matched; message extracted from the body's
    /// `error` field when possible.
    #[error("{message}")]
    BadRequest {
        status: u16,
        message: String,
        body: String,
    },

    /// Any other non-2xx status; message extracted from the body's `message`
    /// field when possible.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        body: String,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error from an underlying cause description
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an unsupported method error
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// The HTTP status this error corresponds to, when one applies.
    ///
    /// `UnsupportedMethod` reports 405 even though it never reaches the
    /// network.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnsupportedMethod { .. } => Some(405),
            Self::ResponseParse { status, .. }
            | Self::RateLimitExceeded { status, .. }
            | Self::KnownStatus { status, .. }
            | Self::BadRequest { status, .. }
            | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response body, for errors that stem from an HTTP response
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::ResponseParse { body, .. }
            | Self::RateLimitExceeded { body, .. }
            | Self::KnownStatus { body, .. }
            | Self::BadRequest { body, .. }
            | Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if this error is worth retrying. The SDK itself never retries;
    /// this is a hint for caller-owned retry policies.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::ServerUnreachable | Self::RateLimitExceeded { .. }
        )
    }
}

/// Result type alias for the paperlink SDK
pub type Result<T> = std::result::Result<T, Error>;
