//! Plain-text output for weather and article lists.

use moodwire_core::{format_temperature, TemperatureUnit};
use moodwire_feed::{NewsFeed, RefreshOutcome};
use moodwire_newsapi::NewsArticle;

const TITLE_WIDTH: usize = 72;

pub(crate) fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_WIDTH {
        format!("{}...", title.chars().take(TITLE_WIDTH).collect::<String>())
    } else {
        title.to_string()
    }
}

pub(crate) fn print_articles(articles: &[NewsArticle]) {
    for (i, article) in articles.iter().enumerate() {
        let marker = if article.has_image() { "*" } else { " " };
        println!(
            "{:>3}.{marker} {:<75} {}",
            i + 1,
            truncate_title(&article.title),
            article.source.name
        );
        println!("       {}", article.url);
    }
}

fn print_feed(heading: &str, feed: &NewsFeed) {
    println!();
    match feed {
        NewsFeed::Disabled => println!("{heading}: news disabled (no categories selected)"),
        NewsFeed::Empty => println!("{heading}: no articles"),
        NewsFeed::Failed(reason) => println!("{heading}: unavailable ({reason})"),
        NewsFeed::Articles(articles) => {
            println!("{heading} ({})", articles.len());
            print_articles(articles);
        }
    }
}

pub(crate) fn print_outcome(outcome: &RefreshOutcome, unit: TemperatureUnit) {
    let weather = &outcome.weather;
    let place = if weather.name.is_empty() {
        format!(
            "{:.2}, {:.2}",
            outcome.location.latitude, outcome.location.longitude
        )
    } else {
        weather.name.clone()
    };

    println!(
        "{place}: {} (feels like {}), {}",
        format_temperature(weather.main.temp, unit),
        format_temperature(weather.main.feels_like, unit),
        weather.summary().unwrap_or("no description")
    );
    println!("Condition: {}  Mood: {}", outcome.condition, outcome.mood);

    if let Some(next) = outcome.forecast.list.first() {
        println!(
            "Next forecast: {} at {}",
            format_temperature(next.main.temp, unit),
            next.dt_txt.as_deref().unwrap_or("unknown time")
        );
    }

    print_feed("Mood news", &outcome.mood_news);
    print_feed("Category news", &outcome.category_news);
}
