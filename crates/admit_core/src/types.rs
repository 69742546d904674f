use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized news article, shaped the way the dashboard client renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub url_to_image: String,
    pub published_at: DateTime<Utc>,
    pub source: ArticleSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
}

impl ArticleSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
