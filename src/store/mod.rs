//! Storage seam for the presence core.
//!
//! Both tables sit behind async traits so the registry and popularity cache
//! never touch a concrete engine. [`sql::SqlStore`] is the real PostgreSQL
//! backend; [`memory::MemoryStore`] backs the tests and embedded use.

use async_trait::async_trait;

use crate::error::PresenceError;
use crate::models::{PlayerRecord, PopularityEntry, Sighting};

pub mod memory;
pub mod sql;

pub use memory::MemoryStore;
pub use sql::SqlStore;

/// Storage for the `players` table. Implementations must make
/// `upsert_sighting` atomic per name: concurrent calls for the same player
/// lose no minutes and never move `last_seen` backward.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Insert-or-update a player row from one sighting. On insert,
    /// `first_seen = last_seen = timestamp`. On update, `last_seen` takes the
    /// max of old and new, `last_server` is overwritten, and
    /// `session_minutes` is added to the running total.
    async fn upsert_sighting(&self, sighting: &Sighting) -> Result<(), PresenceError>;

    async fn get(&self, name: &str) -> Result<Option<PlayerRecord>, PresenceError>;

    /// Players ordered by accumulated minutes, most played first.
    async fn top_players(&self, limit: i64) -> Result<Vec<PlayerRecord>, PresenceError>;
}

/// Storage for the `popular` table. `mark` must be an atomic max-update
/// per name.
#[async_trait]
pub trait PopularityStore: Send + Sync {
    /// Insert-or-raise `last_popular` for a player. An earlier timestamp than
    /// the stored one is a no-op.
    async fn mark(&self, name: &str, timestamp: i64) -> Result<(), PresenceError>;

    async fn entry(&self, name: &str) -> Result<Option<PopularityEntry>, PresenceError>;

    /// Delete every entry with `last_popular < cutoff`. Returns the number of
    /// rows removed.
    async fn sweep(&self, cutoff: i64) -> Result<u64, PresenceError>;
}
