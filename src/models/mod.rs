//! Data model layer
//!
//! Plain serde records mirroring the API's wire shapes. No behavior beyond
//! (de)serialization; the HTTP core produces raw JSON mappings and the
//! resource layer decodes them into these types.

mod dataset;
mod page;
mod paper;
mod paper_repo;
mod repository;

pub use dataset::{Dataset, DatasetCreateRequest, DatasetUpdateRequest};
pub use page::Page;
pub use paper::Paper;
pub use paper_repo::PaperRepo;
pub use repository::Repository;
