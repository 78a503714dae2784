//! Typed resource surface over the HTTP core
//!
//! Builds endpoint paths, delegates to [`HttpClient`], and decodes the raw
//! JSON mappings into typed models. No control flow of its own beyond path
//! construction.

use crate::error::Result;
use crate::http::{ClientConfig, HttpClient, RequestConfig};
use crate::models::{
    Dataset, DatasetCreateRequest, DatasetUpdateRequest, Page, Paper, PaperRepo, Repository,
};
use crate::types::{JsonObject, JsonValue};
use serde::de::DeserializeOwned;

/// Paging parameters for list endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct Paging {
    /// Page number to fetch (1-based)
    pub page: Option<u64>,
    /// Items per page
    pub items_per_page: Option<u64>,
}

impl Paging {
    /// Fetch a specific page
    pub fn page(page: u64) -> Self {
        Self {
            page: Some(page),
            items_per_page: None,
        }
    }

    /// Set the page size
    #[must_use]
    pub fn items_per_page(mut self, items: u64) -> Self {
        self.items_per_page = Some(items);
        self
    }

    fn apply(self, mut config: RequestConfig) -> RequestConfig {
        if let Some(page) = self.page {
            config = config.query("page", page.to_string());
        }
        if let Some(items) = self.items_per_page {
            config = config.query("items_per_page", items.to_string());
        }
        config
    }
}

/// High-level API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    /// Create a client from a validated config
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// The underlying HTTP client, for requests outside the typed surface
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// List papers, optionally filtered by a search query
    pub async fn papers(&self, query: Option<&str>, paging: Paging) -> Result<Page<Paper>> {
        let mut config = paging.apply(RequestConfig::new());
        if let Some(q) = query {
            config = config.query("q", q);
        }
        decode(self.http.get("/papers/", config).await?)
    }

    /// Fetch a single paper by ID
    pub async fn paper(&self, id: &str) -> Result<Paper> {
        decode(self.http.get(&format!("/papers/{id}/"), RequestConfig::new()).await?)
    }

    /// List repositories implementing a paper
    pub async fn paper_repositories(
        &self,
        paper_id: &str,
        paging: Paging,
    ) -> Result<Page<Repository>> {
        let config = paging.apply(RequestConfig::new());
        decode(
            self.http
                .get(&format!("/papers/{paper_id}/repositories/"), config)
                .await?,
        )
    }

    /// List paper <-> repository links
    pub async fn paper_repos(&self, paging: Paging) -> Result<Page<PaperRepo>> {
        let config = paging.apply(RequestConfig::new());
        decode(self.http.get("/paper_repos/", config).await?)
    }

    /// List datasets
    pub async fn datasets(&self, paging: Paging) -> Result<Page<Dataset>> {
        let config = paging.apply(RequestConfig::new());
        decode(self.http.get("/datasets/", config).await?)
    }

    /// Fetch a single dataset by ID
    pub async fn dataset(&self, id: &str) -> Result<Dataset> {
        decode(
            self.http
                .get(&format!("/datasets/{id}/"), RequestConfig::new())
                .await?,
        )
    }

    /// Create a dataset
    pub async fn dataset_add(&self, dataset: &DatasetCreateRequest) -> Result<Dataset> {
        let config = RequestConfig::new().body(dataset)?;
        decode(self.http.post("/datasets/", config).await?)
    }

    /// Update a dataset; only the set fields are sent
    pub async fn dataset_update(
        &self,
        id: &str,
        dataset: &DatasetUpdateRequest,
    ) -> Result<Dataset> {
        let config = RequestConfig::new().body(dataset)?;
        decode(self.http.patch(&format!("/datasets/{id}/"), config).await?)
    }

    /// Delete a dataset
    pub async fn dataset_delete(&self, id: &str) -> Result<()> {
        self.http
            .delete(&format!("/datasets/{id}/"), RequestConfig::new())
            .await?;
        Ok(())
    }
}

/// Decode a raw response mapping into a typed model
fn decode<T: DeserializeOwned>(body: JsonObject) -> Result<T> {
    Ok(serde_json::from_value(JsonValue::Object(body))?)
}
