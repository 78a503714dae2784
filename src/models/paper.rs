//! Paper model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A research paper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper ID
    pub id: String,
    /// arXiv identifier, if the paper is on arXiv
    pub arxiv_id: Option<String>,
    /// URL of the abstract page
    pub url_abs: Option<String>,
    /// URL of the PDF
    pub url_pdf: Option<String>,
    /// Paper title
    pub title: String,
    /// Abstract text
    pub r#abstract: Option<String>,
    /// Author names
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication date
    pub published: Option<NaiveDate>,
    /// Conference the paper appeared at
    pub conference: Option<String>,
    /// URL of the conference abstract page
    pub conference_url_abs: Option<String>,
    /// URL of the conference PDF
    pub conference_url_pdf: Option<String>,
    /// Proceeding the paper appeared in
    pub proceeding: Option<String>,
}
