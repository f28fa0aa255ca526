//! The single fetch run before the table can be shown.

use std::time::Instant;

use crate::{
    data::{CoinProvider, CoinloreProvider, FetchOutcome},
    domain::CoinList,
};

/// Run the provider once and log the outcome. No retries.
pub async fn fetch_coin_data(provider: &dyn CoinProvider) -> FetchOutcome<CoinList> {
    let start = Instant::now();
    let result = provider.fetch_tickers().await;
    match &result {
        Ok(list) => log::info!(
            "Fetched {} coins in {} ms",
            list.len(),
            start.elapsed().as_millis()
        ),
        Err(e) => log::error!("Ticker fetch failed: {}", e),
    }
    result
}

/// Fetch from the public CoinLore endpoint.
pub async fn fetch_from_coinlore() -> FetchOutcome<CoinList> {
    let provider = CoinloreProvider::production()?;
    fetch_coin_data(&provider).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::FetchError, domain::CoinRecord};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Canned {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl CoinProvider for Canned {
        async fn fetch_tickers(&self) -> FetchOutcome<CoinList> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE))
            } else {
                Ok(CoinList::new(vec![CoinRecord::new(
                    "1", "Bitcoin", "BTC", "1", "1",
                )]))
            }
        }
    }

    #[tokio::test]
    async fn passes_list_through() {
        let provider = Canned {
            calls: AtomicUsize::new(0),
            fail: false,
        };
        let list = fetch_coin_data(&provider).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_is_not_retried() {
        let provider = Canned {
            calls: AtomicUsize::new(0),
            fail: true,
        };
        assert!(fetch_coin_data(&provider).await.is_err());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }
}
