//! Catalog entry model

use serde::{Deserialize, Serialize};

/// One promoted article shown in the home page marquee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display title, unique within a catalog
    pub title: String,

    /// Comma-separated category hints, e.g. "react, typescript"
    #[serde(default)]
    pub tags: String,

    /// Short summary shown on the card
    #[serde(default)]
    pub description: String,

    /// Thumbnail path or URL (never checked for existence)
    #[serde(rename = "img", alias = "image_ref", default)]
    pub image_ref: String,

    /// Route of the article, resolved against the content store
    #[serde(rename = "href", alias = "link_target")]
    pub link_target: String,
}

impl CatalogEntry {
    /// Create a new entry
    pub fn new(
        title: impl Into<String>,
        tags: impl Into<String>,
        description: impl Into<String>,
        image_ref: impl Into<String>,
        link_target: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tags: tags.into(),
            description: description.into(),
            image_ref: image_ref.into(),
            link_target: link_target.into(),
        }
    }

    /// Individual tags, trimmed, in the order they were written
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}
