/// REST client settings for the CoinLore tickers endpoint.
pub struct ClientDefaults {
    /// Whole-request timeout. Expiry surfaces as `FetchError::Network`.
    pub timeout_ms: u64,
}

/// Table paging constraints.
pub struct PagingLimits {
    pub page_size: usize,
}

pub struct CoinloreConfig {
    pub endpoint: &'static str,
    pub client: ClientDefaults,
    pub paging: PagingLimits,
}

pub const COINLORE: CoinloreConfig = CoinloreConfig {
    endpoint: "https://api.coinlore.net/api/tickers/",
    client: ClientDefaults {
        timeout_ms: 15_000,
    },
    paging: PagingLimits { page_size: 10 },
};

/// Shorthand used throughout the pagination code.
pub const PAGE_SIZE: usize = COINLORE.paging.page_size;
