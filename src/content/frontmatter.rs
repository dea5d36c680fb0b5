//! Front-matter data

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Front-matter from a post's markdown source
///
/// A fetched record always carries `path` and `title`; any other key the
/// author wrote is kept verbatim in `extra`, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// URL path uniquely identifying the post within the site
    pub path: String,

    /// Display title
    pub title: String,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Create front-matter with the required fields only
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            extra: IndexMap::new(),
        }
    }
}
