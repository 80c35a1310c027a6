//! NewsAPI.org client and the error-normalizing query boundary.
//!
//! [`NewsApiClient`] speaks HTTP and reports failures as [`NewsApiError`].
//! [`NewsQueryClient`] wraps any [`NewsProvider`] and turns every failure into
//! an empty [`NewsResponse`], so aggregation code only ever inspects values.

pub mod client;
pub mod error;
pub mod provider;
pub mod query;
pub mod types;

pub use client::NewsApiClient;
pub use error::NewsApiError;
pub use provider::NewsProvider;
pub use query::NewsQueryClient;
pub use types::{ArticleSource, NewsArticle, NewsResponse, NewsStatus, SearchQuery, SortBy};
