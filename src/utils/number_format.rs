//! Display formatting for the decimal-string fields of a coin record.

/// Shown in place of a number the upstream sent empty or garbled.
pub const UNAVAILABLE: &str = "-";

/// Parse an upstream decimal string. Empty, non-numeric and non-finite input yields `None`.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `"43123.456"` -> `"$43123.46"`.
pub fn format_price(raw: &str) -> String {
    match parse_decimal(raw) {
        Some(price) => format!("${:.2}", price),
        None => UNAVAILABLE.to_string(),
    }
}

/// Total supply in millions, two decimals: `"19000000.0"` -> `"19.00"`.
pub fn format_supply_millions(raw: &str) -> String {
    match parse_decimal(raw) {
        Some(supply) => format!("{:.2}", supply / 1_000_000.0),
        None => UNAVAILABLE.to_string(),
    }
}

/// Supply in millions followed by the coin symbol: `"19.00 BTC"`.
pub fn format_supply(raw: &str, symbol: &str) -> String {
    format!("{} {}", format_supply_millions(raw), symbol)
}
