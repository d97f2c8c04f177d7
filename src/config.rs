use std::env;

/// Seconds a popularity mark stays fresh when nothing is configured.
/// 12 hours, the window the production deployment ran with.
pub const DEFAULT_FRESHNESS_WINDOW_SECS: i64 = 60 * 60 * 12;

/// Seconds between sweep passes when nothing is configured.
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Daemon configuration, read from the environment (via `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub freshness_window_secs: i64,
    pub sweep_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let freshness_window_secs = match env::var("FRESHNESS_WINDOW_SECS") {
            Ok(v) => v
                .parse::<i64>()
                .map_err(|_| anyhow::anyhow!("FRESHNESS_WINDOW_SECS is not an integer: {}", v))?,
            Err(_) => DEFAULT_FRESHNESS_WINDOW_SECS,
        };
        if freshness_window_secs <= 0 {
            anyhow::bail!("FRESHNESS_WINDOW_SECS must be positive");
        }

        let sweep_interval_secs = match env::var("SWEEP_INTERVAL_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("SWEEP_INTERVAL_SECS is not an integer: {}", v))?,
            Err(_) => DEFAULT_SWEEP_INTERVAL_SECS,
        };
        if sweep_interval_secs == 0 {
            anyhow::bail!("SWEEP_INTERVAL_SECS must be positive");
        }

        Ok(Self {
            database_url,
            freshness_window_secs,
            sweep_interval_secs,
        })
    }
}
