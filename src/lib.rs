//! # paperlink
//!
//! Async client SDK for a research-paper/code-linking web API.
//!
//! The core of the crate is the generic HTTP layer ([`HttpClient`]): it joins
//! paths against a configured base URL, merges headers, injects the
//! `Authorization` credential, executes exactly one request per invocation,
//! and classifies the outcome into either a parsed JSON mapping or a typed
//! [`Error`]. The typed [`ApiClient`] on top of it builds endpoint paths and
//! decodes responses into models.
//!
//! The SDK never retries. Timeouts, unreachable servers, and exhausted rate
//! limit quotas are distinct error variants so callers can implement the
//! retry policy that fits their use.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paperlink::{ApiClient, AuthScheme, ClientConfig, Paging, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_url("https://api.example.com/v1")
//!         .auth_scheme(AuthScheme::Token)
//!         .token(std::env::var("API_TOKEN").unwrap_or_default())
//!         .build()?;
//!
//!     let client = ApiClient::new(config);
//!
//!     let page = client.papers(Some("attention"), Paging::page(1)).await?;
//!     for paper in &page.results {
//!         println!("{}", paper.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication scheme and credentials
pub mod auth;

/// HTTP request dispatch and response classification
pub mod http;

/// Data models
pub mod models;

/// Typed resource surface
mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{AuthScheme, Credentials};
pub use client::{ApiClient, Paging};
pub use error::{Error, Result};
pub use http::{ClientConfig, HttpClient, RateLimitInfo, RequestConfig};
pub use models::{
    Dataset, DatasetCreateRequest, DatasetUpdateRequest, Page, Paper, PaperRepo, Repository,
};
pub use types::{JsonObject, JsonValue, Method};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
