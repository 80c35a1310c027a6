use async_trait::async_trait;
use moodwire_core::NewsCategory;

use crate::error::NewsApiError;
use crate::types::{NewsResponse, SearchQuery};

/// The two query shapes the aggregation pipeline needs from a news source.
///
/// Implementations report failures as errors; [`crate::NewsQueryClient`] is
/// the layer that turns them into empty responses.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn top_headlines(
        &self,
        category: NewsCategory,
        country: &str,
        page_size: u32,
    ) -> Result<NewsResponse, NewsApiError>;

    async fn search(&self, query: &SearchQuery) -> Result<NewsResponse, NewsApiError>;
}
