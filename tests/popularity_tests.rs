//! Popularity cache laws: max-wins marking, the freshness window boundary,
//! and sweep expiry.

use std::sync::Arc;

use presence_backend::{MemoryStore, PopularityCache, PresenceError};

fn cache(window_secs: i64) -> PopularityCache {
    PopularityCache::new(Arc::new(MemoryStore::new()), window_secs)
}

#[tokio::test]
async fn fresh_mark_is_popular_until_window_passes() {
    let cache = cache(100);
    cache.mark_popular("bob", 1000).await.unwrap();

    assert!(cache.is_popular("bob", 1050).await.unwrap());
    // Boundary is inclusive.
    assert!(cache.is_popular("bob", 1100).await.unwrap());
    assert!(!cache.is_popular("bob", 1101).await.unwrap());
    assert!(!cache.is_popular("bob", 1200).await.unwrap());
}

#[tokio::test]
async fn unknown_player_is_not_popular() {
    let cache = cache(100);
    assert!(!cache.is_popular("nobody", 1000).await.unwrap());
}

#[tokio::test]
async fn earlier_mark_never_lowers_the_stored_timestamp() {
    let cache = cache(100);
    cache.mark_popular("bob", 1000).await.unwrap();
    cache.mark_popular("bob", 900).await.unwrap();

    // Still fresh relative to the t=1000 mark; a t=900 mark would have aged out.
    assert!(cache.is_popular("bob", 1080).await.unwrap());
}

#[tokio::test]
async fn remarking_extends_freshness() {
    let cache = cache(100);
    cache.mark_popular("bob", 1000).await.unwrap();
    cache.mark_popular("bob", 1500).await.unwrap();

    assert!(cache.is_popular("bob", 1600).await.unwrap());
    assert!(!cache.is_popular("bob", 1601).await.unwrap());
}

#[tokio::test]
async fn sweep_removes_exactly_the_stale_entries() {
    let cache = cache(100);
    cache.mark_popular("stale", 1000).await.unwrap();
    cache.mark_popular("edge", 1100).await.unwrap();
    cache.mark_popular("fresh", 1190).await.unwrap();

    // Cutoff is 1200 - 100 = 1100; "edge" sits exactly on it and survives.
    let removed = cache.sweep(1200).await.unwrap();
    assert_eq!(removed, 1);

    assert!(!cache.is_popular("stale", 1200).await.unwrap());
    assert!(cache.is_popular("edge", 1200).await.unwrap());
    assert!(cache.is_popular("fresh", 1200).await.unwrap());
}

#[tokio::test]
async fn sweep_on_empty_cache_removes_nothing() {
    let cache = cache(100);
    assert_eq!(cache.sweep(5000).await.unwrap(), 0);
}

#[tokio::test]
async fn mark_refreshed_after_sweep_cutoff_survives() {
    let cache = cache(100);
    cache.mark_popular("bob", 500).await.unwrap();
    // Refresh lands before the sweep runs; the entry is fresh again.
    cache.mark_popular("bob", 1150).await.unwrap();

    let removed = cache.sweep(1200).await.unwrap();
    assert_eq!(removed, 0);
    assert!(cache.is_popular("bob", 1200).await.unwrap());
}

#[tokio::test]
async fn fresh_mark_racing_sweep_is_never_lost() {
    // A mark refreshing a stale entry while a sweep expires it must land
    // under either ordering: sweep-then-mark reinserts, mark-then-sweep
    // keeps the refreshed entry. Losing the mark is not a valid outcome.
    for _ in 0..500 {
        let cache = Arc::new(cache(100));
        cache.mark_popular("bob", 500).await.unwrap();

        let marker = {
            let cache = cache.clone();
            tokio::spawn(async move { cache.mark_popular("bob", 1150).await.unwrap() })
        };
        let sweeper = {
            let cache = cache.clone();
            tokio::spawn(async move { cache.sweep(1200).await.unwrap() })
        };
        marker.await.unwrap();
        sweeper.await.unwrap();

        assert!(cache.is_popular("bob", 1200).await.unwrap());
    }
}

#[tokio::test]
async fn empty_name_rejected() {
    let cache = cache(100);
    assert!(matches!(
        cache.mark_popular("", 1000).await.unwrap_err(),
        PresenceError::Validation(_)
    ));
    assert!(matches!(
        cache.is_popular("", 1000).await.unwrap_err(),
        PresenceError::Validation(_)
    ));
}

#[tokio::test]
async fn concurrent_marks_keep_the_maximum() {
    let cache = Arc::new(cache(100));

    let mut handles = Vec::new();
    for t in 0..50i64 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            cache.mark_popular("bob", 1000 + t).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Max mark is 1049, so freshness runs out exactly at 1149.
    assert!(cache.is_popular("bob", 1149).await.unwrap());
    assert!(!cache.is_popular("bob", 1150).await.unwrap());
}
