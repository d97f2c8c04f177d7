use std::sync::Arc;

use dotenvy::dotenv;

use presence_backend::{Config, PopularityCache, SqlStore};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("Failed to load configuration");

    let pool = presence_backend::db::establish_connection(&config.database_url)
        .await
        .expect("Failed to create pool");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let store = Arc::new(SqlStore::new(pool));
    let cache = Arc::new(PopularityCache::new(store, config.freshness_window_secs));

    tracing::info!("presence backend up");
    presence_backend::sweeper::start_sweep_loop(cache, config.sweep_interval_secs).await;
}
