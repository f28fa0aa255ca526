//! Terminal rendering of one page, for `--headless`.

use anyhow::{Context as _, Result, bail};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Style, object::Columns},
};
use tokio::runtime::Builder;

use crate::{
    Cli,
    app::AppState,
    data::fetch_from_coinlore,
    domain::CoinRecord,
    models::CoinTable,
    ui::{CoinColumn, UI_TEXT, page_label, range_label},
};

#[derive(Tabled)]
struct CoinRow {
    #[tabled(rename = "Coin")]
    name: String,
    #[tabled(rename = "Code")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Total Supply")]
    supply: String,
}

impl From<&CoinRecord> for CoinRow {
    fn from(coin: &CoinRecord) -> Self {
        CoinRow {
            name: CoinColumn::Name.cell_text(coin),
            symbol: CoinColumn::Symbol.cell_text(coin),
            price: CoinColumn::Price.cell_text(coin),
            supply: CoinColumn::TotalSupply.cell_text(coin),
        }
    }
}

/// Heading, the visible rows, and the page footer.
pub fn render_report(table: &CoinTable) -> String {
    let mut out = format!("{}\n", UI_TEXT.heading);
    let rows: Vec<CoinRow> = table.visible().iter().map(CoinRow::from).collect();
    if rows.is_empty() {
        out.push_str(&UI_TEXT.no_coins);
        out.push('\n');
    } else {
        let mut grid = Table::new(rows);
        grid.with(Style::rounded())
            .modify(Columns::new(2..), Alignment::right());
        out.push_str(&grid.to_string());
        out.push('\n');
    }
    out.push_str(&page_label(table));
    if let Some(range) = range_label(table) {
        out.push_str(&format!("  ({})", range));
    }
    out
}

/// Fetch once and render the requested page without opening a window.
pub fn run_headless(args: &Cli) -> Result<String> {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("could not start async runtime")?;
    let outcome = rt.block_on(fetch_from_coinlore());

    match AppState::loading(args.page).on_fetch_complete(outcome) {
        AppState::Loaded(loaded) => Ok(render_report(&loaded.table)),
        AppState::Failed(failed) => bail!("{} {}", UI_TEXT.error_prefix, failed.message),
        AppState::Loading(_) => bail!("fetch did not settle"),
    }
}
