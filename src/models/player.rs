use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Canonical presence facts for one player, one row in `players`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    /// Unix seconds of the first recorded sighting. NULL for rows imported
    /// from the legacy JSON dump, which predates the column.
    pub first_seen: Option<i64>,
    /// Unix seconds of the most recent sighting. Never moves backward.
    pub last_seen: i64,
    pub last_server: Option<String>,
    /// Accumulated minutes played. Never decreases.
    pub minutes: i64,
}

/// One observed presence event, as reported by a sighting source.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Sighting {
    pub name: String,
    pub server: String,
    /// Unix seconds at which the player was observed.
    pub timestamp: i64,
    /// Duration of the session being closed, in minutes.
    pub session_minutes: i64,
}
