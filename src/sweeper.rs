use std::sync::Arc;

use chrono::Utc;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::popularity::PopularityCache;

/// Periodic maintenance loop expiring stale popularity entries.
///
/// Runs forever on a fixed interval; ticks that fall behind are skipped
/// rather than replayed, and a failed pass is logged and retried on the next
/// tick instead of killing the loop.
pub async fn start_sweep_loop(cache: Arc<PopularityCache>, interval_secs: u64) {
    tracing::info!(
        interval_secs,
        window_secs = cache.window_secs(),
        "popularity sweep loop started"
    );
    let mut ticker = interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let now = Utc::now().timestamp();
        match cache.sweep(now).await {
            Ok(0) => {}
            Ok(removed) => tracing::info!(removed, "expired stale popularity entries"),
            Err(e) => tracing::error!("popularity sweep failed: {}", e),
        }
    }
}
