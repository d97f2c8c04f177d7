//! Presence-and-popularity tracking core for a public game-server monitor.
//!
//! Owns two persisted tables: `players` (first/last seen, last server,
//! accumulated minutes per player) and `popular` (a decaying time-stamped
//! popularity marker per player). Sighting sources feed
//! [`registry::PlayerRegistry`]; [`popularity::PopularityCache`] answers
//! freshness queries and a periodic [`sweeper`] pass expires stale marks.
//!
//! Storage is injected through the [`store`] traits; the shipped backends
//! are PostgreSQL and an in-memory fake.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod policy;
pub mod popularity;
pub mod registry;
pub mod store;
pub mod sweeper;
pub mod utils;

pub use config::Config;
pub use error::PresenceError;
pub use models::{PlayerRecord, PopularityEntry, Sighting};
pub use policy::{PopularityPolicy, SessionThreshold};
pub use popularity::PopularityCache;
pub use registry::{PlayerRegistry, PopularityHook};
pub use store::{MemoryStore, PlayerStore, PopularityStore, SqlStore};
