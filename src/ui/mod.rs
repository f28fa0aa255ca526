mod coin_table_view;
mod columns;
mod pager;
mod screens;
mod ui_config;
mod ui_text;

pub(crate) use coin_table_view::{render_coin_table, render_heading};
pub use columns::CoinColumn;
pub use pager::{PageNav, page_label, range_label};
pub(crate) use pager::render_pager;
pub(crate) use screens::{render_failed, render_loading};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
