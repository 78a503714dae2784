//! Rate limit header parsing
//!
//! The server communicates its request quota through `X-Ratelimit-*`
//! response headers. The SDK only detects exhaustion; waiting out the quota
//! is the caller's job.

use reqwest::header::HeaderMap;

/// Header that marks a response as carrying rate limit information
pub const RATELIMIT_LIMIT: &str = "X-Ratelimit-Limit";
/// Requests remaining in the current window
pub const RATELIMIT_REMAINING: &str = "X-Ratelimit-Remaining";
/// When the current window resets
pub const RATELIMIT_RESET: &str = "X-Ratelimit-Reset";
/// Seconds to wait before retrying
pub const RATELIMIT_RETRY: &str = "X-Ratelimit-Retry";

/// Quota values parsed from `X-Ratelimit-*` response headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Request cap for the window
    pub limit: i64,
    /// Requests remaining in the window
    pub remaining: i64,
    /// When the window resets
    pub reset: i64,
    /// Seconds to wait before retrying
    pub retry: i64,
}

impl RateLimitInfo {
    /// Parse rate limit info from response headers.
    ///
    /// Returns `None` when the server did not emit `X-Ratelimit-Limit`.
    /// Companion headers that are missing or malformed parse as 0.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers.get(RATELIMIT_LIMIT)?;
        Some(Self {
            limit: header_i64(headers, RATELIMIT_LIMIT),
            remaining: header_i64(headers, RATELIMIT_REMAINING),
            reset: header_i64(headers, RATELIMIT_RESET),
            retry: header_i64(headers, RATELIMIT_RETRY),
        })
    }

    /// The quota is exhausted when the server reports zero remaining requests
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

fn header_i64(headers: &HeaderMap, name: &str) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}
