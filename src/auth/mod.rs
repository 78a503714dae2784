//! Authentication module
//!
//! The API authenticates with a single credential placed in the
//! `Authorization` header as `"<scheme> <token>"`. Token acquisition and
//! storage are out of scope; the caller supplies the token at configuration
//! time.

mod types;

pub use types::{AuthScheme, Credentials};

#[cfg(test)]
mod tests;
