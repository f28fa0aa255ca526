// Domain types and value objects
mod coin;

// Re-export commonly used types to the world
pub use coin::{CoinList, CoinRecord, TickersInfo};
