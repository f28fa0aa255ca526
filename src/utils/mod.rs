mod number_format;
mod time_utils;

pub use number_format::{
    UNAVAILABLE, format_price, format_supply, format_supply_millions, parse_decimal,
};
pub use time_utils::{format_age, format_unix_secs, secs_since};
