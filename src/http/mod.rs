//! HTTP client module
//!
//! The generic request/response layer of the SDK:
//!
//! - **Request dispatch**: URL joining, header merging, auth injection
//! - **Response classification**: status codes mapped onto a typed error
//!   taxonomy, in a fixed priority order
//! - **Rate limit detection**: `X-Ratelimit-*` headers parsed and surfaced
//!
//! Retries, backoff, and caching are deliberately left to the caller.

mod client;
mod rate_limit;

pub use client::{ClientConfig, ClientConfigBuilder, HttpClient, RequestConfig};
pub use rate_limit::RateLimitInfo;
