//! News matched to the weather's mood.

use moodwire_core::{broad_query_for, keywords_for, mood_for, WeatherCondition};
use moodwire_newsapi::{NewsArticle, NewsQueryClient, NewsResponse, SortBy};

use crate::merge::{dedup_by_url, rank_by_image};
use crate::strategy::isolated_concurrent;

pub const MAX_MOOD_ARTICLES: usize = 10;
pub const BROAD_FALLBACK_LIMIT: usize = 5;
const KEYWORD_PAGE_SIZE: u32 = 20;
const LANGUAGE: &str = "en";

pub struct MoodNewsFetcher {
    query: NewsQueryClient,
}

impl MoodNewsFetcher {
    #[must_use]
    pub fn new(query: NewsQueryClient) -> Self {
        Self { query }
    }

    /// Up to 10 on-mood articles for `condition`, image-bearing ones first.
    ///
    /// Runs one search per query term concurrently; a failed term only loses
    /// its own results. When nothing relevant survives, a single broad query
    /// supplies up to 5 articles instead.
    pub async fn fetch_for_condition(&self, condition: WeatherCondition) -> Vec<NewsArticle> {
        let mood = mood_for(condition);
        let keywords = keywords_for(mood);

        let responses = isolated_concurrent(keywords.query_terms(), |term| {
            self.query
                .search_by_keyword(term, SortBy::Relevancy, LANGUAGE, KEYWORD_PAGE_SIZE)
        })
        .await;

        let pooled = dedup_by_url(
            responses
                .into_iter()
                .flat_map(NewsResponse::into_articles)
                .collect(),
        );
        let pooled_count = pooled.len();

        let terms = keywords.relevance_terms();
        let relevant: Vec<NewsArticle> = pooled
            .into_iter()
            .filter(|a| mentions_any(&a.search_text(), &terms))
            .collect();

        let mut ranked = rank_by_image(relevant);
        ranked.truncate(MAX_MOOD_ARTICLES);

        tracing::debug!(
            condition = %condition,
            mood = %mood,
            pooled = pooled_count,
            kept = ranked.len(),
            "mood keyword searches complete"
        );

        if !ranked.is_empty() {
            return ranked;
        }

        let broad = broad_query_for(mood);
        tracing::info!(mood = %mood, query = broad, "no mood articles, trying broad query");
        let mut fallback = self
            .query
            .search_by_keyword(broad, SortBy::Relevancy, LANGUAGE, KEYWORD_PAGE_SIZE)
            .await
            .into_articles();
        fallback.truncate(BROAD_FALLBACK_LIMIT);
        fallback
    }
}

/// Keeps articles whose title or description mentions one of the mood's
/// generic keywords.
#[must_use]
pub fn filter_by_condition(
    articles: Vec<NewsArticle>,
    condition: WeatherCondition,
) -> Vec<NewsArticle> {
    let generic: Vec<String> = keywords_for(mood_for(condition))
        .generic
        .iter()
        .map(|k| k.to_lowercase())
        .collect();
    articles
        .into_iter()
        .filter(|a| mentions_any(&a.search_text(), &generic))
        .collect()
}

fn mentions_any(text: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| text.contains(t.as_str()))
}

#[cfg(test)]
#[path = "mood_test.rs"]
mod tests;
