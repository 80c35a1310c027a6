//! HTTP client for the NewsAPI.org REST API.
//!
//! Wraps `reqwest` with NewsAPI-specific error handling, API key management,
//! and typed response deserialization. The key travels in the `X-Api-Key`
//! header so it never appears in URLs or logs.

use std::time::Duration;

use async_trait::async_trait;
use moodwire_core::NewsCategory;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::NewsApiError;
use crate::provider::NewsProvider;
use crate::types::{NewsResponse, NewsStatus, SearchQuery};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";
const API_KEY_HEADER: &str = "X-Api-Key";

/// Body NewsAPI sends alongside `"status": "error"`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the NewsAPI.org REST API.
///
/// Use [`NewsApiClient::new`] for production or
/// [`NewsApiClient::with_base_url`] to point at a mock server in tests.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl NewsApiClient {
    /// Creates a new client pointed at the production NewsAPI.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NewsApiError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NewsApiError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NewsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join("top-headlines")` appends to the
        // version path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| NewsApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches top headlines for one category in one country.
    ///
    /// # Errors
    ///
    /// - [`NewsApiError::Api`] if NewsAPI answers with an error body.
    /// - [`NewsApiError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`NewsApiError::Http`] on network failure or timeout.
    /// - [`NewsApiError::Deserialize`] if the body is not a NewsAPI envelope.
    pub async fn get_top_headlines(
        &self,
        category: NewsCategory,
        country: &str,
        page_size: u32,
    ) -> Result<NewsResponse, NewsApiError> {
        let url = self.build_url(
            "top-headlines",
            &[
                ("country", country),
                ("category", category.as_str()),
                ("pageSize", &page_size.to_string()),
            ],
        )?;
        self.request_news(url, "top-headlines").await
    }

    /// Searches all articles via the `everything` endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_top_headlines`].
    pub async fn search_everything(
        &self,
        query: &SearchQuery,
    ) -> Result<NewsResponse, NewsApiError> {
        let url = self.build_url(
            "everything",
            &[
                ("q", &query.q),
                ("sortBy", query.sort_by.as_str()),
                ("language", &query.language),
                ("pageSize", &query.page_size.to_string()),
            ],
        )?;
        self.request_news(url, "everything").await
    }

    /// Builds the endpoint URL with percent-encoded query parameters.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, NewsApiError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| NewsApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request and decodes the NewsAPI envelope.
    ///
    /// Error bodies (`"status": "error"`) are surfaced as
    /// [`NewsApiError::Api`] whether they arrive with a 2xx or 4xx/5xx status.
    async fn request_news(&self, url: Url, endpoint: &str) -> Result<NewsResponse, NewsApiError> {
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::parse_error_body(&body).unwrap_or(
                NewsApiError::UnexpectedStatus {
                    status: status.as_u16(),
                    endpoint: endpoint.to_owned(),
                },
            ));
        }

        let parsed: NewsResponse =
            serde_json::from_str(&body).map_err(|e| NewsApiError::Deserialize {
                context: endpoint.to_owned(),
                source: e,
            })?;

        if parsed.status == NewsStatus::Error {
            return Err(Self::parse_error_body(&body).unwrap_or(NewsApiError::Api {
                code: "unknown".to_owned(),
                message: "status error without message".to_owned(),
            }));
        }

        Ok(parsed)
    }

    /// Extracts `code`/`message` from a NewsAPI error body, if it is one.
    fn parse_error_body(body: &str) -> Option<NewsApiError> {
        let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
        if parsed.code.is_none() && parsed.message.is_none() {
            return None;
        }
        Some(NewsApiError::Api {
            code: parsed.code.unwrap_or_else(|| "unknown".to_owned()),
            message: parsed.message.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn top_headlines(
        &self,
        category: NewsCategory,
        country: &str,
        page_size: u32,
    ) -> Result<NewsResponse, NewsApiError> {
        self.get_top_headlines(category, country, page_size).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<NewsResponse, NewsApiError> {
        self.search_everything(query).await
    }
}
