//! NewsAPI response and request types.
//!
//! Wire names are camelCase (`urlToImage`, `publishedAt`, `totalResults`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// NewsAPI sends `null` for some string fields it documents as present.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Publisher attribution attached to every article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// One article. `url` is the identity used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    pub source: ArticleSource,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewsArticle {
    /// Whether the article carries a non-blank image URL.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.url_to_image
            .as_deref()
            .is_some_and(|u| !u.trim().is_empty())
    }

    /// Lowercased `title + " " + description`, the text keyword filters match against.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.title,
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    Ok,
    Error,
}

/// Envelope returned by both `top-headlines` and `everything`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: NewsStatus,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

impl NewsResponse {
    /// The normalized shape of any upstream failure.
    #[must_use]
    pub fn error() -> Self {
        Self {
            status: NewsStatus::Error,
            total_results: 0,
            articles: Vec::new(),
        }
    }

    #[must_use]
    pub fn ok(articles: Vec<NewsArticle>) -> Self {
        Self {
            status: NewsStatus::Ok,
            total_results: articles.len() as u64,
            articles,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    #[must_use]
    pub fn into_articles(self) -> Vec<NewsArticle> {
        self.articles
    }
}

/// `sortBy` values accepted by the `everything` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Relevancy,
    Popularity,
    PublishedAt,
}

impl SortBy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Relevancy => "relevancy",
            SortBy::Popularity => "popularity",
            SortBy::PublishedAt => "publishedAt",
        }
    }
}

/// Parameters for one `everything` search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub sort_by: SortBy,
    pub language: String,
    pub page_size: u32,
}

impl SearchQuery {
    /// Keyword search: relevancy order, English, 20 results.
    #[must_use]
    pub fn keyword(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            sort_by: SortBy::Relevancy,
            language: "en".to_string(),
            page_size: 20,
        }
    }

    /// Category phrase search: newest first, English, 15 results.
    #[must_use]
    pub fn category_phrase(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            sort_by: SortBy::PublishedAt,
            language: "en".to_string(),
            page_size: 15,
        }
    }
}
