//! Code repository model

use serde::{Deserialize, Serialize};

/// A code repository implementing one or more papers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository URL
    pub url: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Repository description
    pub description: Option<String>,
    /// Star count
    #[serde(default)]
    pub stars: u64,
    /// Framework the implementation uses (e.g. "pytorch")
    pub framework: Option<String>,
}
