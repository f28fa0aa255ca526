use eframe::egui::{Align, Layout};
use strum_macros::{Display, EnumIter};

use crate::{
    domain::CoinRecord,
    utils::{format_price, format_supply},
};

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum CoinColumn {
    #[strum(to_string = "Coin")]
    Name,
    #[strum(to_string = "Code")]
    Symbol,
    #[strum(to_string = "Price")]
    Price,
    #[strum(to_string = "Total Supply")]
    TotalSupply,
}

impl CoinColumn {
    pub fn is_numeric(self) -> bool {
        matches!(self, CoinColumn::Price | CoinColumn::TotalSupply)
    }

    /// Numbers are right aligned.
    pub fn layout(self) -> Layout {
        if self.is_numeric() {
            Layout::right_to_left(Align::Center)
        } else {
            Layout::left_to_right(Align::Center)
        }
    }

    pub fn min_width(self) -> f32 {
        match self {
            CoinColumn::Name => 160.0,
            CoinColumn::Symbol => 70.0,
            CoinColumn::Price => 120.0,
            CoinColumn::TotalSupply => 160.0,
        }
    }

    /// Display text for this column of `coin`.
    pub fn cell_text(self, coin: &CoinRecord) -> String {
        match self {
            CoinColumn::Name => coin.name.clone(),
            CoinColumn::Symbol => coin.symbol.clone(),
            CoinColumn::Price => format_price(&coin.price_usd),
            CoinColumn::TotalSupply => format_supply(&coin.tsupply, &coin.symbol),
        }
    }
}
