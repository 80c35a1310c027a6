//! Headlines for the user's selected categories.

use std::time::Duration;

use moodwire_core::NewsCategory;
use moodwire_newsapi::{NewsArticle, NewsQueryClient, NewsResponse};
use serde::Serialize;

use crate::merge::merge;
use crate::strategy::{isolated_concurrent, rate_limited_sequential};

pub const MAX_CATEGORY_ARTICLES: usize = 20;
pub const FALLBACK_CATEGORY_LIMIT: usize = 3;
pub const DEFAULT_INTER_REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Headlines attributed to the category they were fetched for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryHeadlines {
    pub category: NewsCategory,
    pub articles: Vec<NewsArticle>,
}

pub struct CategoryAggregator {
    query: NewsQueryClient,
    inter_request_delay: Duration,
}

impl CategoryAggregator {
    #[must_use]
    pub fn new(query: NewsQueryClient) -> Self {
        Self {
            query,
            inter_request_delay: DEFAULT_INTER_REQUEST_DELAY,
        }
    }

    #[must_use]
    pub fn with_inter_request_delay(mut self, delay: Duration) -> Self {
        self.inter_request_delay = delay;
        self
    }

    /// Merged headlines across `categories`, at most 20, first-seen order.
    ///
    /// Categories are queried one at a time with a pause between calls. If
    /// every category comes back empty, the first three are retried
    /// concurrently with a phrase-search fallback each.
    pub async fn fetch_for_categories(&self, categories: &[NewsCategory]) -> Vec<NewsArticle> {
        if categories.is_empty() {
            return Vec::new();
        }

        let pool: Vec<Vec<NewsArticle>> = self
            .fetch_per_category(categories)
            .await
            .into_iter()
            .map(|h| h.articles)
            .filter(|articles| !articles.is_empty())
            .collect();

        if !pool.is_empty() {
            return merge(pool, MAX_CATEGORY_ARTICLES);
        }

        let fallback_categories = &categories[..categories.len().min(FALLBACK_CATEGORY_LIMIT)];
        tracing::info!(
            categories = ?fallback_categories,
            "no category headlines, running fallback pass"
        );
        let fallback = isolated_concurrent(fallback_categories.iter().copied(), |category| {
            self.query.headlines_with_fallback(category)
        })
        .await;

        let merged = merge(
            fallback.into_iter().map(NewsResponse::into_articles),
            MAX_CATEGORY_ARTICLES,
        );
        if merged.is_empty() {
            tracing::warn!("category fallback pass returned no articles");
        }
        merged
    }

    /// One sequential, rate-limited pass with per-category attribution.
    ///
    /// Failed categories appear with an empty article list.
    pub async fn fetch_per_category(&self, categories: &[NewsCategory]) -> Vec<CategoryHeadlines> {
        rate_limited_sequential(
            categories.iter().copied(),
            self.inter_request_delay,
            |category| async move {
                let articles = self.query.top_headlines(category).await.into_articles();
                tracing::debug!(category = %category, count = articles.len(), "category headlines");
                CategoryHeadlines { category, articles }
            },
        )
        .await
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
