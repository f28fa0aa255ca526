mod error;
mod fetch;
mod provider;

pub use {
    error::{FetchError, FetchOutcome},
    fetch::{fetch_coin_data, fetch_from_coinlore},
    provider::{CoinProvider, CoinloreProvider},
};
