use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::COINLORE,
    data::{FetchError, FetchOutcome},
    domain::CoinList,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Abstract interface for fetching the ticker list.
///
/// The table logic only ever sees this trait, so tests can hand it a canned list.
#[async_trait]
pub trait CoinProvider: Send + Sync {
    /// Fetch every ticker the source returns, in source order.
    async fn fetch_tickers(&self) -> FetchOutcome<CoinList>;
}

pub struct CoinloreProvider {
    client: Client,
    endpoint: String,
}

impl CoinloreProvider {
    pub fn new(endpoint: impl Into<String>) -> FetchOutcome<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(COINLORE.client.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Use a caller-built client (custom proxy or TLS settings).
    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Provider pointed at the public CoinLore endpoint.
    pub fn production() -> FetchOutcome<Self> {
        Self::new(COINLORE.endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CoinProvider for CoinloreProvider {
    async fn fetch_tickers(&self) -> FetchOutcome<CoinList> {
        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!("GET {}", self.endpoint);
        }

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // Read the body as text first so a shape mismatch is reported as
        // MalformedResponse rather than as a transport error.
        let body = response.text().await?;
        let list: CoinList = serde_json::from_str(&body)?;

        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!("Received {} tickers ({} bytes)", list.len(), body.len());
        }
        Ok(list)
    }
}
