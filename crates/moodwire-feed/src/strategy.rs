//! The two fan-out strategies used for news queries.
//!
//! Category headlines go out one at a time with a pause between calls so a
//! free-tier API key is not throttled. Mood keyword searches and fallback
//! passes go out all at once. Neither strategy can fail as a batch: the
//! per-item future already returns a plain value.

use std::future::Future;
use std::time::Duration;

use futures::future::join_all;

/// Runs `f` for each item in order, sleeping `delay` between calls (never
/// before the first or after the last).
pub async fn rate_limited_sequential<T, R, F, Fut>(
    items: impl IntoIterator<Item = T>,
    delay: Duration,
    mut f: F,
) -> Vec<R>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = R>,
{
    let mut results = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        results.push(f(item).await);
    }
    results
}

/// Runs `f` for every item concurrently. Results keep input order.
pub async fn isolated_concurrent<T, R, F, Fut>(items: impl IntoIterator<Item = T>, f: F) -> Vec<R>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = R>,
{
    join_all(items.into_iter().map(f)).await
}
