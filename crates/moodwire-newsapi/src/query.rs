//! Error-normalizing boundary over a [`NewsProvider`].
//!
//! Every method here is infallible: transport errors, API errors, and
//! timeouts are logged and become [`NewsResponse::error()`].

use std::sync::Arc;
use std::time::Duration;

use moodwire_core::NewsCategory;

use crate::error::NewsApiError;
use crate::provider::NewsProvider;
use crate::types::{NewsResponse, SearchQuery, SortBy};

const HEADLINES_PAGE_SIZE: u32 = 20;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct NewsQueryClient {
    provider: Arc<dyn NewsProvider>,
    country: String,
    timeout: Duration,
}

impl NewsQueryClient {
    pub fn new(provider: Arc<dyn NewsProvider>, country: impl Into<String>) -> Self {
        Self {
            provider,
            country: country.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Upper bound applied to each provider call.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Top headlines for one category in the configured country.
    pub async fn top_headlines(&self, category: NewsCategory) -> NewsResponse {
        let call = self
            .provider
            .top_headlines(category, &self.country, HEADLINES_PAGE_SIZE);
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(response)) => {
                tracing::debug!(
                    category = %category,
                    articles = response.articles.len(),
                    "top headlines fetched"
                );
                response
            }
            Ok(Err(e)) => {
                tracing::warn!(category = %category, error = %e, "top headlines failed");
                NewsResponse::error()
            }
            Err(_) => {
                tracing::warn!(
                    category = %category,
                    timeout_ms = self.timeout_ms(),
                    "top headlines timed out"
                );
                NewsResponse::error()
            }
        }
    }

    /// Free-text search on the `everything` endpoint.
    pub async fn search_by_keyword(
        &self,
        keyword: &str,
        sort_by: SortBy,
        language: &str,
        page_size: u32,
    ) -> NewsResponse {
        let query = SearchQuery {
            q: keyword.to_owned(),
            sort_by,
            language: language.to_owned(),
            page_size,
        };
        self.search(&query).await
    }

    pub async fn search(&self, query: &SearchQuery) -> NewsResponse {
        match tokio::time::timeout(self.timeout, self.provider.search(query)).await {
            Ok(Ok(response)) => {
                tracing::debug!(
                    keyword = %query.q,
                    articles = response.articles.len(),
                    "keyword search fetched"
                );
                response
            }
            Ok(Err(e)) => {
                log_search_failure(&query.q, &e);
                NewsResponse::error()
            }
            Err(_) => {
                tracing::warn!(
                    keyword = %query.q,
                    timeout_ms = self.timeout_ms(),
                    "keyword search timed out"
                );
                NewsResponse::error()
            }
        }
    }

    /// Recent articles matching the category's search phrase.
    pub async fn search_by_category(&self, category: NewsCategory) -> NewsResponse {
        self.search(&SearchQuery::category_phrase(category.search_phrase()))
            .await
    }

    /// Top headlines, falling back to a category phrase search when empty.
    pub async fn headlines_with_fallback(&self, category: NewsCategory) -> NewsResponse {
        let headlines = self.top_headlines(category).await;
        if !headlines.is_empty() {
            return headlines;
        }
        tracing::debug!(category = %category, "no headlines, trying category search");
        self.search_by_category(category).await
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

fn log_search_failure(keyword: &str, error: &NewsApiError) {
    match error {
        NewsApiError::Api { code, .. } => {
            tracing::warn!(keyword, code = %code, error = %error, "keyword search rejected");
        }
        _ => tracing::warn!(keyword, error = %error, "keyword search failed"),
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
