//! One-shot importer for a legacy `players.json` dump.
//!
//! The pre-database deployment kept presence facts in a flat JSON map of
//! player name to `{last_seen, last_server, minutes}`. This loads that file
//! into the `players` table in a single transaction. Imported rows have no
//! `first_seen`; the column stays NULL for them.
//!
//! Usage: `cargo run --bin import_players [path/to/players.json]`

use std::collections::BTreeMap;
use std::env;

use anyhow::Context;
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LegacyPlayer {
    last_seen: i64,
    last_server: Option<String>,
    minutes: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let path = env::args().nth(1).unwrap_or_else(|| "players.json".to_string());
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path))?;
    let players: BTreeMap<String, LegacyPlayer> =
        serde_json::from_str(&raw).context("players.json is not a name -> player map")?;

    let pool = presence_backend::db::establish_connection(&database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let mut tx = pool.begin().await?;
    for (name, player) in &players {
        sqlx::query(
            "INSERT INTO players (name, last_seen, last_server, minutes)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(name)
        .bind(player.last_seen)
        .bind(&player.last_server)
        .bind(player.minutes)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("failed to insert player {}", name))?;
    }
    tx.commit().await?;

    tracing::info!("imported {} players from {}", players.len(), path);
    Ok(())
}
