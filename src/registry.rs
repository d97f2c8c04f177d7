use std::sync::Arc;

use crate::error::{validate_name, PresenceError};
use crate::models::{PlayerRecord, Sighting};
use crate::policy::PopularityPolicy;
use crate::popularity::PopularityCache;
use crate::store::PlayerStore;

/// Single source of truth for player presence.
///
/// Wraps a [`PlayerStore`] with input validation and, when a hook is
/// installed, forwards qualifying sightings to the popularity cache. The two
/// writes are separate transactions; a popularity mark trailing its sighting
/// by a moment is acceptable.
pub struct PlayerRegistry {
    store: Arc<dyn PlayerStore>,
    hook: Option<PopularityHook>,
}

/// Policy plus destination for popularity marks derived from sightings.
pub struct PopularityHook {
    pub policy: Arc<dyn PopularityPolicy>,
    pub cache: Arc<PopularityCache>,
}

impl PlayerRegistry {
    pub fn new(store: Arc<dyn PlayerStore>) -> Self {
        Self { store, hook: None }
    }

    pub fn with_popularity_hook(mut self, hook: PopularityHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Records one sighting. Creates the player on first contact; afterwards
    /// `last_seen` only moves forward, `last_server` follows the report, and
    /// minutes accumulate. Rejects empty/oversized names and negative
    /// session durations before touching storage.
    pub async fn record_sighting(&self, sighting: &Sighting) -> Result<(), PresenceError> {
        validate_name("player", &sighting.name)?;
        validate_name("server", &sighting.server)?;
        if sighting.session_minutes < 0 {
            return Err(PresenceError::Validation(format!(
                "negative session minutes: {}",
                sighting.session_minutes
            )));
        }

        self.store.upsert_sighting(sighting).await?;

        if let Some(hook) = &self.hook {
            if hook.policy.qualifies(sighting) {
                hook.cache
                    .mark_popular(&sighting.name, sighting.timestamp)
                    .await?;
            }
        }
        Ok(())
    }

    pub async fn get(&self, name: &str) -> Result<Option<PlayerRecord>, PresenceError> {
        validate_name("player", name)?;
        self.store.get(name).await
    }

    /// Accumulated minutes for a player; zero for unknown names, since an
    /// unseen player and one with no recorded playtime look the same.
    pub async fn total_minutes(&self, name: &str) -> Result<i64, PresenceError> {
        validate_name("player", name)?;
        let record = self.store.get(name).await?;
        Ok(record.map_or(0, |r| r.minutes))
    }

    /// The `limit` most-played players, ordered by minutes descending.
    pub async fn top_players(&self, limit: i64) -> Result<Vec<PlayerRecord>, PresenceError> {
        self.store.top_players(limit).await
    }
}
