use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::PresenceError;
use crate::models::{PlayerRecord, PopularityEntry, Sighting};
use crate::store::{PlayerStore, PopularityStore};

/// PostgreSQL-backed store for both tables. All writes are single-statement
/// upserts, so per-name atomicity comes from row-level locking and different
/// names never contend.
#[derive(Clone)]
pub struct SqlStore {
    pool: PgPool,
}

impl SqlStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerStore for SqlStore {
    async fn upsert_sighting(&self, sighting: &Sighting) -> Result<(), PresenceError> {
        // GREATEST keeps last_seen monotone under clock skew; first_seen is
        // only written on insert.
        sqlx::query(
            "INSERT INTO players (name, first_seen, last_seen, last_server, minutes)
             VALUES ($1, $2, $2, $3, $4)
             ON CONFLICT (name) DO UPDATE SET
                 last_seen = GREATEST(players.last_seen, EXCLUDED.last_seen),
                 last_server = EXCLUDED.last_server,
                 minutes = players.minutes + EXCLUDED.minutes",
        )
        .bind(&sighting.name)
        .bind(sighting.timestamp)
        .bind(&sighting.server)
        .bind(sighting.session_minutes)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<PlayerRecord>, PresenceError> {
        let record = sqlx::query_as::<_, PlayerRecord>(
            "SELECT name, first_seen, last_seen, last_server, minutes
             FROM players WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn top_players(&self, limit: i64) -> Result<Vec<PlayerRecord>, PresenceError> {
        let records = sqlx::query_as::<_, PlayerRecord>(
            "SELECT name, first_seen, last_seen, last_server, minutes
             FROM players ORDER BY minutes DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}

#[async_trait]
impl PopularityStore for SqlStore {
    async fn mark(&self, name: &str, timestamp: i64) -> Result<(), PresenceError> {
        sqlx::query(
            "INSERT INTO popular (name, last_popular)
             VALUES ($1, $2)
             ON CONFLICT (name) DO UPDATE SET
                 last_popular = GREATEST(popular.last_popular, EXCLUDED.last_popular)",
        )
        .bind(name)
        .bind(timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn entry(&self, name: &str) -> Result<Option<PopularityEntry>, PresenceError> {
        let entry = sqlx::query_as::<_, PopularityEntry>(
            "SELECT name, last_popular FROM popular WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(entry)
    }

    async fn sweep(&self, cutoff: i64) -> Result<u64, PresenceError> {
        let result = sqlx::query("DELETE FROM popular WHERE last_popular < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
