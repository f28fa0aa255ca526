use serde::{Deserialize, Deserializer};

/// One ticker entry from the CoinLore `tickers` endpoint.
///
/// Numeric fields are kept exactly as the upstream sends them (decimal strings)
/// and only parsed at presentation time. Any upstream fields not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoinRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(deserialize_with = "lenient_string")]
    pub price_usd: String,
    // Not every coin publishes a total supply; upstream sends null for those.
    #[serde(default, deserialize_with = "lenient_string")]
    pub tsupply: String,
}

impl CoinRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        price_usd: impl Into<String>,
        tsupply: impl Into<String>,
    ) -> Self {
        CoinRecord {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            price_usd: price_usd.into(),
            tsupply: tsupply.into(),
        }
    }
}

/// The `info` block of the tickers envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TickersInfo {
    /// Total number of coins CoinLore tracks (not the number returned).
    #[serde(default)]
    pub coins_num: u64,
    /// Unix seconds at which the snapshot was taken.
    #[serde(default)]
    pub time: i64,
}

/// Full response body: `{ "data": [...], "info": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoinList {
    #[serde(rename = "data")]
    pub coins: Vec<CoinRecord>,
    #[serde(default)]
    pub info: Option<TickersInfo>,
}

impl CoinList {
    pub fn new(coins: Vec<CoinRecord>) -> Self {
        CoinList { coins, info: None }
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Number(serde_json::Number),
}

/// Accepts `"1.5"`, `1.5` or `null` and always yields a string (`null` -> `""`).
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Text(s)) => s,
        Some(RawField::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "data": [
            {
                "id": "90",
                "symbol": "BTC",
                "name": "Bitcoin",
                "nameid": "bitcoin",
                "rank": 1,
                "price_usd": "43123.456",
                "percent_change_24h": "0.52",
                "csupply": "19600000.00",
                "tsupply": "19600000",
                "msupply": "21000000"
            },
            {
                "id": "80",
                "symbol": "ETH",
                "name": "Ethereum",
                "price_usd": "2300.12",
                "tsupply": null
            }
        ],
        "info": { "coins_num": 12345, "time": 1700000000 }
    }"#;

    #[test]
    fn deserializes_upstream_envelope() {
        let list: CoinList = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.coins[0],
            CoinRecord::new("90", "Bitcoin", "BTC", "43123.456", "19600000")
        );
        assert_eq!(
            list.info,
            Some(TickersInfo {
                coins_num: 12345,
                time: 1_700_000_000
            })
        );
    }

    #[test]
    fn null_supply_becomes_empty_string() {
        let list: CoinList = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(list.coins[1].tsupply, "");
    }

    #[test]
    fn numeric_fields_may_arrive_as_numbers() {
        let json = r#"{"data":[{"id":7,"name":"X","symbol":"X","price_usd":1.25,"tsupply":100}]}"#;
        let list: CoinList = serde_json::from_str(json).unwrap();
        assert_eq!(list.coins[0].id, "7");
        assert_eq!(list.coins[0].price_usd, "1.25");
        assert_eq!(list.coins[0].tsupply, "100");
        assert!(list.info.is_none());
    }

    #[test]
    fn missing_data_field_is_rejected() {
        assert!(serde_json::from_str::<CoinList>(r#"{"coins": []}"#).is_err());
    }

    #[test]
    fn missing_price_is_rejected() {
        let json = r#"{"data":[{"id":"1","name":"X","symbol":"X"}]}"#;
        assert!(serde_json::from_str::<CoinList>(json).is_err());
    }

    #[test]
    fn order_is_preserved() {
        let list: CoinList = serde_json::from_str(SAMPLE).unwrap();
        let ids: Vec<&str> = list.coins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["90", "80"]);
    }
}
