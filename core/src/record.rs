use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One indexed content item from the site's store: a blog post or video page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Site-relative page URL; unique identifier within a store.
    pub url: String,
    /// Teaser image path; empty when the page has none.
    #[serde(default)]
    pub teaser: String,
}
