//! Document model

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Validated front-matter metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Article title
    pub title: String,

    /// Publication date
    pub date: NaiveDate,

    /// Ordered list of authors
    pub authors: Vec<String>,

    /// Excerpt exactly as written in the front matter
    pub excerpt: Option<String>,

    /// Hero image reference (may be empty)
    pub hero: Option<String>,

    /// Drafts never appear in published listings
    pub draft: bool,

    /// Declared reading time in minutes
    #[serde(rename = "timeToRead")]
    pub time_to_read: Option<u32>,

    /// Custom front-matter fields, in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// A render-ready document
///
/// Built once per source file at render time and immutable afterwards;
/// the templating layer consumes it and throws it away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Parsed and validated metadata
    pub metadata: Metadata,

    /// Raw markup body following the metadata block
    pub raw: String,

    /// Body rendered to HTML
    pub content: String,

    /// Rendered excerpt HTML
    pub excerpt: Option<String>,

    /// Resolved reading time in minutes
    pub time_to_read: u32,
}
