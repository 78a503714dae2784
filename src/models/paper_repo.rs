//! Paper <-> repository link model

use super::{Paper, Repository};
use serde::{Deserialize, Serialize};

/// Link between a paper and a repository implementing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRepo {
    /// The paper
    pub paper: Paper,
    /// The repository; absent when the paper has no linked code
    pub repository: Option<Repository>,
    /// Whether this is the official implementation
    pub is_official: bool,
}
