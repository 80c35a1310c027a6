//! Combining article lists.

use std::collections::HashSet;

use moodwire_newsapi::NewsArticle;

/// Flattens `lists` in order, drops later duplicates by URL, and keeps at
/// most `cap` articles.
#[must_use]
pub fn merge<I>(lists: I, cap: usize) -> Vec<NewsArticle>
where
    I: IntoIterator<Item = Vec<NewsArticle>>,
{
    let mut merged = dedup_by_url(lists.into_iter().flatten().collect());
    merged.truncate(cap);
    merged
}

/// Keeps the first article seen for each URL.
#[must_use]
pub fn dedup_by_url(articles: Vec<NewsArticle>) -> Vec<NewsArticle> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|a| seen.insert(a.url.clone()))
        .collect()
}

/// Stable partition: articles with an image first, relative order kept
/// within each group.
#[must_use]
pub fn rank_by_image(articles: Vec<NewsArticle>) -> Vec<NewsArticle> {
    let (mut with_image, without_image): (Vec<_>, Vec<_>) =
        articles.into_iter().partition(NewsArticle::has_image);
    with_image.extend(without_image);
    with_image
}
