//! Auth configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization scheme: the prefix placed before the credential in the
/// `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthScheme {
    /// HTTP Basic authentication
    Basic,
    /// Opaque token authentication
    Token,
    /// JSON Web Token authentication
    #[default]
    #[serde(rename = "JWT")]
    Jwt,
}

impl AuthScheme {
    /// The literal scheme string used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            AuthScheme::Basic => "Basic",
            AuthScheme::Token => "Token",
            AuthScheme::Jwt => "JWT",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential pair applied to outgoing requests.
///
/// An empty (or whitespace-only) token means unauthenticated access; no
/// `Authorization` header is produced in that case.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Authorization scheme
    pub scheme: AuthScheme,
    /// The credential itself; may be empty
    pub token: String,
}

impl Credentials {
    /// Create credentials with the given scheme and token
    pub fn new(scheme: AuthScheme, token: impl Into<String>) -> Self {
        Self {
            scheme,
            token: token.into(),
        }
    }

    /// Unauthenticated credentials
    pub fn none() -> Self {
        Self::default()
    }

    /// The `Authorization` header value, or `None` when the token is empty
    /// or whitespace-only.
    ///
    /// The token is sent verbatim; only the emptiness check trims it.
    pub fn header_value(&self) -> Option<String> {
        if self.token.trim().is_empty() {
            None
        } else {
            Some(format!("{} {}", self.scheme.as_str(), self.token))
        }
    }
}
