//! `news` command handlers: direct access to the aggregation pieces.

use std::time::Duration;

use clap::Subcommand;
use moodwire_core::{AppConfig, NewsCategory, WeatherCondition};
use moodwire_feed::{CategoryAggregator, MoodNewsFetcher};
use moodwire_newsapi::SortBy;

use crate::refresh::build_news_client;
use crate::render::print_articles;

/// Sub-commands available under `news`.
#[derive(Debug, Subcommand)]
pub enum NewsCommands {
    /// Merged top headlines for one or more categories
    Headlines {
        /// Categories, comma-separated or repeated
        #[arg(long = "category", value_delimiter = ',', default_value = "general")]
        categories: Vec<NewsCategory>,
        /// Print each category separately instead of merging
        #[arg(long)]
        per_category: bool,
    },
    /// Keyword search over all articles
    Search {
        keyword: String,
        /// Maximum number of results
        #[arg(long, default_value = "20")]
        page_size: u32,
        /// Sort by recency instead of relevance
        #[arg(long)]
        latest: bool,
    },
    /// News for a weather condition (cold, cool, hot)
    Mood {
        #[arg(value_parser = parse_condition)]
        condition: WeatherCondition,
    },
}

fn parse_condition(raw: &str) -> Result<WeatherCondition, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "cold" => Ok(WeatherCondition::Cold),
        "cool" => Ok(WeatherCondition::Cool),
        "hot" => Ok(WeatherCondition::Hot),
        other => Err(format!("unknown condition '{other}' (expected cold, cool, or hot)")),
    }
}

/// # Errors
///
/// Returns an error if the news client cannot be built. Upstream failures
/// print as empty results.
pub(crate) async fn run(config: &AppConfig, command: NewsCommands) -> anyhow::Result<()> {
    let client = build_news_client(config)?;

    match command {
        NewsCommands::Headlines {
            categories,
            per_category,
        } => {
            let aggregator = CategoryAggregator::new(client).with_inter_request_delay(
                Duration::from_millis(config.news_inter_request_delay_ms),
            );
            if per_category {
                for headlines in aggregator.fetch_per_category(&categories).await {
                    println!("\n{} ({})", headlines.category, headlines.articles.len());
                    print_articles(&headlines.articles);
                }
            } else {
                let articles = aggregator.fetch_for_categories(&categories).await;
                report(&articles);
            }
        }
        NewsCommands::Search {
            keyword,
            page_size,
            latest,
        } => {
            let sort = if latest {
                SortBy::PublishedAt
            } else {
                SortBy::Relevancy
            };
            let response = client
                .search_by_keyword(&keyword, sort, "en", page_size)
                .await;
            report(&response.articles);
        }
        NewsCommands::Mood { condition } => {
            let articles = MoodNewsFetcher::new(client)
                .fetch_for_condition(condition)
                .await;
            report(&articles);
        }
    }
    Ok(())
}

fn report(articles: &[moodwire_newsapi::NewsArticle]) {
    if articles.is_empty() {
        println!("no articles found");
    } else {
        print_articles(articles);
    }
}
