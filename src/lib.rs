// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::{App, AppState};
pub use data::{CoinProvider, CoinloreProvider, FetchError, fetch_coin_data};
pub use domain::{CoinList, CoinRecord};
pub use models::CoinTable;
pub use report::run_headless;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the page to stdout instead of opening a window
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Page to show first (clamped to the available pages)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
