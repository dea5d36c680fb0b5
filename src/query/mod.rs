//! Post query artifact
//!
//! The query that selects a post for one page build is declarative
//! configuration owned by the data-fetch stage, not template logic.
//! This module gives the artifact a typed shape so both sides of the
//! boundary agree on the fields crossing it:
//!
//! ```yaml
//! filter:
//!   path: /hello-world
//! select:
//!   - html
//!   - frontmatter.path
//!   - frontmatter.title
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fields the post template reads from a fetched record
pub const REQUIRED_FIELDS: [&str; 3] = ["html", "frontmatter.path", "frontmatter.title"];

/// Errors reading or checking a query artifact
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Selection is missing required field: {0}")]
    MissingField(String),

    #[error("Invalid query artifact: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Filter naming the post one page build fetches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFilter {
    /// Front-matter `path` to match exactly
    pub path: String,
}

/// Declarative post query consumed by the data-fetch stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostQuery {
    pub filter: PostFilter,

    /// Field selectors the fetch stage must supply
    #[serde(default = "default_select")]
    pub select: Vec<String>,
}

fn default_select() -> Vec<String> {
    REQUIRED_FIELDS.iter().map(|s| s.to_string()).collect()
}

impl PostQuery {
    /// Build the query for a single page build with the default selection
    pub fn by_path(path: impl Into<String>) -> Self {
        Self {
            filter: PostFilter { path: path.into() },
            select: default_select(),
        }
    }

    /// Parse a query artifact from YAML
    pub fn parse(content: &str) -> Result<Self, QueryError> {
        let query: PostQuery = serde_yaml::from_str(content)?;
        query.validate()?;
        Ok(query)
    }

    /// Load a query artifact from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, QueryError> {
        let content = fs::read_to_string(path.as_ref())?;
        let query = Self::parse(&content)?;
        tracing::debug!("Loaded post query from {:?}", path.as_ref());
        Ok(query)
    }

    /// Check that the selection covers every field the template reads
    pub fn validate(&self) -> Result<(), QueryError> {
        for field in REQUIRED_FIELDS {
            if !self.select.iter().any(|s| s == field) {
                return Err(QueryError::MissingField(field.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_by_path_selects_required_fields() {
        let query = PostQuery::by_path("/hello-world");
        assert_eq!(query.filter.path, "/hello-world");
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml_artifact() {
        let yaml = r#"
filter:
  path: /foo
select:
  - html
  - frontmatter.path
  - frontmatter.title
"#;

        let query = PostQuery::parse(yaml).unwrap();
        assert_eq!(query.filter.path, "/foo");
        assert_eq!(query.select.len(), 3);
    }

    #[test]
    fn test_parse_defaults_selection() {
        let yaml = "filter:\n  path: /bar\n";
        let query = PostQuery::parse(yaml).unwrap();
        assert_eq!(query.select, default_select());
    }

    #[test]
    fn test_missing_field_is_named() {
        let yaml = r#"
filter:
  path: /foo
select:
  - html
  - frontmatter.path
"#;

        let err = PostQuery::parse(yaml).unwrap_err();
        match err {
            QueryError::MissingField(field) => assert_eq!(field, "frontmatter.title"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "filter:\n  path: /from-disk\n").unwrap();

        let query = PostQuery::load(file.path()).unwrap();
        assert_eq!(query.filter.path, "/from-disk");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = PostQuery::load("/nonexistent/post_query.yml").unwrap_err();
        assert!(matches!(err, QueryError::Io(_)));
    }

    #[test]
    fn test_roundtrip() {
        let query = PostQuery::by_path("/rt");
        let yaml = serde_yaml::to_string(&query).unwrap();
        let back = PostQuery::parse(&yaml).unwrap();
        assert_eq!(query, back);
    }
}
