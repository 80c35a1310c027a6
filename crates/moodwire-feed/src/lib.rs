//! Mood-driven news aggregation.
//!
//! Turns a weather reading into two article lists: mood news (keyword
//! searches chosen by the weather condition) and category news (top
//! headlines for the user's selected categories). [`RefreshService`] runs
//! one full cycle from location to both lists.

pub mod category;
pub mod error;
pub mod merge;
pub mod mood;
pub mod refresh;
pub mod strategy;

#[cfg(test)]
mod test_support;

pub use category::{CategoryAggregator, CategoryHeadlines};
pub use error::RefreshError;
pub use merge::{dedup_by_url, merge, rank_by_image};
pub use mood::{filter_by_condition, MoodNewsFetcher};
pub use refresh::{NewsFeed, RefreshOutcome, RefreshService};
pub use strategy::{isolated_concurrent, rate_limited_sequential};
