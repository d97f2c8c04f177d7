use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::error::PresenceError;
use crate::models::{PlayerRecord, PopularityEntry, Sighting};
use crate::store::{PlayerStore, PopularityStore};

/// In-memory store with the same atomicity contract as the SQL backend.
///
/// Each row lives behind its own mutex; the outer `RwLock` only guards the
/// map structure, so updates to different names proceed in parallel. Used by
/// the test suite and anywhere a database is unwanted.
#[derive(Default)]
pub struct MemoryStore {
    players: RwLock<HashMap<String, Arc<Mutex<PlayerRecord>>>>,
    popular: RwLock<HashMap<String, Arc<Mutex<i64>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerStore for MemoryStore {
    async fn upsert_sighting(&self, sighting: &Sighting) -> Result<(), PresenceError> {
        let existing = {
            let players = self.players.read().await;
            players.get(&sighting.name).cloned()
        };

        if let Some(cell) = existing {
            let mut record = cell.lock().await;
            record.last_seen = record.last_seen.max(sighting.timestamp);
            record.last_server = Some(sighting.server.clone());
            record.minutes += sighting.session_minutes;
            return Ok(());
        }

        // First sighting for this name, or we raced another inserter.
        let mut players = self.players.write().await;
        match players.entry(sighting.name.clone()) {
            Entry::Occupied(slot) => {
                let mut record = slot.get().lock().await;
                record.last_seen = record.last_seen.max(sighting.timestamp);
                record.last_server = Some(sighting.server.clone());
                record.minutes += sighting.session_minutes;
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(PlayerRecord {
                    name: sighting.name.clone(),
                    first_seen: Some(sighting.timestamp),
                    last_seen: sighting.timestamp,
                    last_server: Some(sighting.server.clone()),
                    minutes: sighting.session_minutes,
                })));
            }
        }
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<PlayerRecord>, PresenceError> {
        let cell = {
            let players = self.players.read().await;
            players.get(name).cloned()
        };
        match cell {
            Some(cell) => Ok(Some(cell.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn top_players(&self, limit: i64) -> Result<Vec<PlayerRecord>, PresenceError> {
        let cells: Vec<Arc<Mutex<PlayerRecord>>> = {
            let players = self.players.read().await;
            players.values().cloned().collect()
        };

        let mut records = Vec::with_capacity(cells.len());
        for cell in cells {
            records.push(cell.lock().await.clone());
        }
        records.sort_by(|a, b| b.minutes.cmp(&a.minutes));
        records.truncate(limit.max(0) as usize);
        Ok(records)
    }
}

#[async_trait]
impl PopularityStore for MemoryStore {
    async fn mark(&self, name: &str, timestamp: i64) -> Result<(), PresenceError> {
        {
            // The read guard must span the cell update: sweep removes entries
            // under the write lock, and a mark landing in a cell that sweep
            // already detached would be lost. Read guards are shared, so
            // marks for different names still proceed in parallel.
            let popular = self.popular.read().await;
            if let Some(cell) = popular.get(name) {
                let mut last_popular = cell.lock().await;
                *last_popular = (*last_popular).max(timestamp);
                return Ok(());
            }
        }

        let mut popular = self.popular.write().await;
        match popular.entry(name.to_string()) {
            Entry::Occupied(slot) => {
                let mut last_popular = slot.get().lock().await;
                *last_popular = (*last_popular).max(timestamp);
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(timestamp)));
            }
        }
        Ok(())
    }

    async fn entry(&self, name: &str) -> Result<Option<PopularityEntry>, PresenceError> {
        let cell = {
            let popular = self.popular.read().await;
            popular.get(name).cloned()
        };
        match cell {
            Some(cell) => Ok(Some(PopularityEntry {
                name: name.to_string(),
                last_popular: *cell.lock().await,
            })),
            None => Ok(None),
        }
    }

    async fn sweep(&self, cutoff: i64) -> Result<u64, PresenceError> {
        // Holding the write lock keeps the pass consistent: entries refreshed
        // after the caller's cutoff snapshot carry timestamps >= cutoff and
        // survive.
        let mut popular = self.popular.write().await;
        let mut stale = Vec::new();
        for (name, cell) in popular.iter() {
            if *cell.lock().await < cutoff {
                stale.push(name.clone());
            }
        }
        for name in &stale {
            popular.remove(name);
        }
        Ok(stale.len() as u64)
    }
}
