//! Fakes shared by the unit tests in this crate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use moodwire_core::{Coordinates, NewsCategory, TemperatureUnit};
use moodwire_newsapi::{
    ArticleSource, NewsApiError, NewsArticle, NewsProvider, NewsQueryClient, NewsResponse,
    SearchQuery,
};
use moodwire_weather::{
    City, ForecastData, LocationError, LocationProvider, MainReadings, WeatherData, WeatherError,
    WeatherProvider, Wind,
};

pub(crate) fn article(url: &str) -> NewsArticle {
    NewsArticle {
        title: format!("headline {url}"),
        description: None,
        url: url.to_string(),
        url_to_image: None,
        source: ArticleSource {
            id: None,
            name: "Test Wire".to_string(),
        },
        author: None,
        published_at: None,
        content: None,
    }
}

pub(crate) fn article_with_image(url: &str) -> NewsArticle {
    NewsArticle {
        url_to_image: Some(format!("{url}.jpg")),
        ..article(url)
    }
}

pub(crate) fn titled(url: &str, title: &str) -> NewsArticle {
    NewsArticle {
        title: title.to_string(),
        ..article(url)
    }
}

/// Recorded call against [`FakeNews`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NewsCall {
    Headlines(NewsCategory),
    Search(String),
}

/// Scripted news source. Unknown categories return no articles; unknown
/// search terms fail with an API error.
#[derive(Default)]
pub(crate) struct FakeNews {
    pub headlines: HashMap<NewsCategory, Vec<NewsArticle>>,
    pub failing_categories: Vec<NewsCategory>,
    pub searches: HashMap<String, Vec<NewsArticle>>,
    pub search_latency: Option<Duration>,
    pub calls: Mutex<Vec<NewsCall>>,
}

impl FakeNews {
    pub(crate) fn with_headlines(mut self, category: NewsCategory, articles: Vec<NewsArticle>) -> Self {
        self.headlines.insert(category, articles);
        self
    }

    pub(crate) fn with_search(mut self, q: &str, articles: Vec<NewsArticle>) -> Self {
        self.searches.insert(q.to_string(), articles);
        self
    }

    /// Every search sleeps this long before answering.
    pub(crate) fn with_search_latency(mut self, latency: Duration) -> Self {
        self.search_latency = Some(latency);
        self
    }

    pub(crate) fn failing(mut self, category: NewsCategory) -> Self {
        self.failing_categories.push(category);
        self
    }

    pub(crate) fn calls(&self) -> Vec<NewsCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                NewsCall::Search(q) => Some(q),
                NewsCall::Headlines(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl NewsProvider for FakeNews {
    async fn top_headlines(
        &self,
        category: NewsCategory,
        _country: &str,
        _page_size: u32,
    ) -> Result<NewsResponse, NewsApiError> {
        self.calls.lock().unwrap().push(NewsCall::Headlines(category));
        if self.failing_categories.contains(&category) {
            return Err(NewsApiError::UnexpectedStatus {
                status: 500,
                endpoint: "top-headlines".to_string(),
            });
        }
        Ok(NewsResponse::ok(
            self.headlines.get(&category).cloned().unwrap_or_default(),
        ))
    }

    async fn search(&self, query: &SearchQuery) -> Result<NewsResponse, NewsApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(NewsCall::Search(query.q.clone()));
        if let Some(latency) = self.search_latency {
            tokio::time::sleep(latency).await;
        }
        match self.searches.get(&query.q) {
            Some(articles) => Ok(NewsResponse::ok(articles.clone())),
            None => Err(NewsApiError::Api {
                code: "rateLimited".to_string(),
                message: "scripted failure".to_string(),
            }),
        }
    }
}

pub(crate) fn query_client(fake: &Arc<FakeNews>) -> NewsQueryClient {
    NewsQueryClient::new(Arc::clone(fake) as Arc<dyn NewsProvider>, "in")
}

pub(crate) fn weather_at(temp: f64) -> WeatherData {
    WeatherData {
        name: "Hyderabad".to_string(),
        main: MainReadings {
            temp,
            feels_like: temp,
            temp_min: temp,
            temp_max: temp,
            humidity: 50,
            pressure: 1010,
        },
        weather: Vec::new(),
        wind: Wind::default(),
        clouds: moodwire_weather::Clouds::default(),
        visibility: None,
        dt: 0,
    }
}

/// Weather source reporting a fixed temperature, or failing.
pub(crate) struct FakeWeather {
    pub temp: Option<f64>,
    pub calls: AtomicUsize,
    pub units: Mutex<Vec<TemperatureUnit>>,
}

impl FakeWeather {
    pub(crate) fn reporting(temp: f64) -> Self {
        Self {
            temp: Some(temp),
            calls: AtomicUsize::new(0),
            units: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn down() -> Self {
        Self {
            temp: None,
            calls: AtomicUsize::new(0),
            units: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn current_weather(
        &self,
        _coords: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<WeatherData, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.units.lock().unwrap().push(unit);
        match self.temp {
            Some(temp) => Ok(weather_at(temp)),
            None => Err(WeatherError::UnexpectedStatus {
                status: 503,
                endpoint: "weather".to_string(),
            }),
        }
    }

    async fn forecast(
        &self,
        _coords: Coordinates,
        _unit: TemperatureUnit,
    ) -> Result<ForecastData, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.temp {
            Some(_) => Ok(ForecastData {
                list: Vec::new(),
                city: City {
                    name: "Hyderabad".to_string(),
                    country: "IN".to_string(),
                },
            }),
            None => Err(WeatherError::UnexpectedStatus {
                status: 503,
                endpoint: "forecast".to_string(),
            }),
        }
    }
}

pub(crate) struct FailingLocation;

#[async_trait]
impl LocationProvider for FailingLocation {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unavailable("permission denied".to_string()))
    }
}

pub(crate) const HYDERABAD: Coordinates = Coordinates {
    latitude: 17.38,
    longitude: 78.48,
};
