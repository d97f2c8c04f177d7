pub mod player;
pub mod popular;

pub use player::{PlayerRecord, Sighting};
pub use popular::PopularityEntry;
