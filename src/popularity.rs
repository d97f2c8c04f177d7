use std::sync::Arc;

use crate::error::{validate_name, PresenceError};
use crate::store::PopularityStore;

/// Answers "is this player currently popular" against a bounded-freshness
/// window. A mark is fresh while `now - last_popular <= window`; anything
/// older counts as not popular whether or not the row still exists, and
/// `sweep` eventually deletes it.
pub struct PopularityCache {
    store: Arc<dyn PopularityStore>,
    window_secs: i64,
}

impl PopularityCache {
    pub fn new(store: Arc<dyn PopularityStore>, window_secs: i64) -> Self {
        Self { store, window_secs }
    }

    pub fn window_secs(&self) -> i64 {
        self.window_secs
    }

    /// Records that a player qualified as popular at `timestamp`. Max-wins:
    /// a mark at or before the stored timestamp changes nothing.
    pub async fn mark_popular(&self, name: &str, timestamp: i64) -> Result<(), PresenceError> {
        validate_name("player", name)?;
        self.store.mark(name, timestamp).await
    }

    /// Pure read; never mutates the store.
    pub async fn is_popular(&self, name: &str, now: i64) -> Result<bool, PresenceError> {
        validate_name("player", name)?;
        let entry = self.store.entry(name).await?;
        Ok(entry.is_some_and(|e| now - e.last_popular <= self.window_secs))
    }

    /// Deletes every entry stale as of `now`. Returns how many were removed.
    pub async fn sweep(&self, now: i64) -> Result<u64, PresenceError> {
        self.store.sweep(now - self.window_secs).await
    }
}
