use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row in `popular`: the most recent moment a player qualified as
/// popular. Freshness against the configured window decides whether the
/// player still counts as popular now.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
pub struct PopularityEntry {
    pub name: String,
    pub last_popular: i64,
}
