//! Post record model

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::FrontMatter;

/// A post as handed over by the data-fetch stage
///
/// Records are built once per page build, read by the template, and
/// discarded after render. Nothing in this crate mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Rendered body markup. Opaque to the page template.
    pub html: String,

    /// Front-matter fields selected by the post query
    pub frontmatter: FrontMatter,
}

impl PostRecord {
    /// Create a record from already-fetched parts
    pub fn new(html: impl Into<String>, frontmatter: FrontMatter) -> Self {
        Self {
            html: html.into(),
            frontmatter,
        }
    }

    /// Decode a query result payload into a record
    ///
    /// The fetch stage emits one JSON object per page build with the
    /// fields named by the query artifact.
    pub fn from_query_result(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|e| anyhow!("Failed to decode post query result: {}", e))
    }
}
