//! Dataset models

use serde::{Deserialize, Serialize};

/// A dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset ID
    pub id: String,
    /// Dataset name
    pub name: String,
    /// Dataset full name
    pub full_name: Option<String>,
    /// URL for dataset download
    pub url: Option<String>,
}

/// Request body for creating a dataset.
///
/// Unset optional fields are omitted from the serialized body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetCreateRequest {
    /// Dataset name
    pub name: String,
    /// Dataset full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Dataset URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Request body for updating a dataset; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetUpdateRequest {
    /// Dataset name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Dataset URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
