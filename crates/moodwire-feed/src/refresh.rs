//! One full refresh: location, weather, mood, and both news lists.

use std::sync::Arc;
use std::time::Duration;

use moodwire_core::{
    classify, mood_for, Coordinates, NewsCategory, NewsFilterType, Settings, WeatherCondition,
};
use moodwire_newsapi::{NewsArticle, NewsQueryClient};
use moodwire_weather::{ForecastData, LocationProvider, WeatherData, WeatherProvider};
use serde::Serialize;
use tokio::task::JoinError;

use crate::category::CategoryAggregator;
use crate::error::RefreshError;
use crate::mood::MoodNewsFetcher;

/// State of one news list after a refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsFeed {
    /// No categories selected; nothing was fetched.
    Disabled,
    Articles(Vec<NewsArticle>),
    /// Fetched, but nothing came back.
    Empty,
    /// The fetch task itself died.
    Failed(String),
}

impl NewsFeed {
    fn from_articles(articles: Vec<NewsArticle>) -> Self {
        if articles.is_empty() {
            NewsFeed::Empty
        } else {
            NewsFeed::Articles(articles)
        }
    }

    fn from_task(result: Result<Vec<NewsArticle>, JoinError>, feed: &'static str) -> Self {
        match result {
            Ok(articles) => Self::from_articles(articles),
            Err(e) => {
                tracing::error!(feed, error = %e, "news task failed");
                NewsFeed::Failed(e.to_string())
            }
        }
    }

    #[must_use]
    pub fn articles(&self) -> &[NewsArticle] {
        match self {
            NewsFeed::Articles(articles) => articles,
            NewsFeed::Disabled | NewsFeed::Empty | NewsFeed::Failed(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshOutcome {
    pub location: Coordinates,
    pub weather: WeatherData,
    pub forecast: ForecastData,
    pub condition: WeatherCondition,
    pub mood: NewsFilterType,
    pub mood_news: NewsFeed,
    pub category_news: NewsFeed,
}

pub struct RefreshService {
    location: Arc<dyn LocationProvider>,
    weather: Arc<dyn WeatherProvider>,
    mood_news: Arc<MoodNewsFetcher>,
    category_news: Arc<CategoryAggregator>,
}

impl RefreshService {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        weather: Arc<dyn WeatherProvider>,
        news: NewsQueryClient,
        inter_request_delay: Duration,
    ) -> Self {
        Self {
            location,
            weather,
            mood_news: Arc::new(MoodNewsFetcher::new(news.clone())),
            category_news: Arc::new(
                CategoryAggregator::new(news).with_inter_request_delay(inter_request_delay),
            ),
        }
    }

    /// Runs one refresh cycle for `settings`.
    ///
    /// 1. Resolve the location.
    /// 2. Fetch current weather and forecast concurrently.
    /// 3. Classify the temperature and derive the mood.
    /// 4. If any category is selected, fetch mood news and category news as
    ///    two independent tasks. Otherwise both feeds are `Disabled`.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::Location`] or [`RefreshError::Weather`] when
    /// those lookups fail; news is not attempted in that case. News failures
    /// never surface as errors.
    pub async fn refresh(&self, settings: &Settings) -> Result<RefreshOutcome, RefreshError> {
        let location = self.location.current_location().await?;
        let unit = settings.temperature_unit;

        let (weather, forecast) = tokio::try_join!(
            self.weather.current_weather(location, unit),
            self.weather.forecast(location, unit),
        )?;

        let condition = classify(weather.main.temp, unit, &settings.temperature_thresholds);
        let mood = mood_for(condition);
        tracing::info!(
            temp = weather.main.temp,
            unit = %unit,
            condition = %condition,
            mood = %mood,
            "weather classified"
        );

        let (mood_news, category_news) = if settings.news_enabled() {
            self.fetch_news(condition, settings.selected_news_categories.clone())
                .await
        } else {
            tracing::info!("no news categories selected, skipping news");
            (NewsFeed::Disabled, NewsFeed::Disabled)
        };

        Ok(RefreshOutcome {
            location,
            weather,
            forecast,
            condition,
            mood,
            mood_news,
            category_news,
        })
    }

    async fn fetch_news(
        &self,
        condition: WeatherCondition,
        categories: Vec<NewsCategory>,
    ) -> (NewsFeed, NewsFeed) {
        let mood_task = {
            let fetcher = Arc::clone(&self.mood_news);
            tokio::spawn(async move { fetcher.fetch_for_condition(condition).await })
        };
        let category_task = {
            let aggregator = Arc::clone(&self.category_news);
            tokio::spawn(async move { aggregator.fetch_for_categories(&categories).await })
        };

        let (mood_result, category_result) = tokio::join!(mood_task, category_task);
        (
            NewsFeed::from_task(mood_result, "mood"),
            NewsFeed::from_task(category_result, "category"),
        )
    }
}

#[cfg(test)]
#[path = "refresh_test.rs"]
mod tests;
