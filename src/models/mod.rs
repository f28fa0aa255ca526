mod coin_table;
mod pagination;

pub use coin_table::CoinTable;
pub use pagination::{
    PageState, go_to_next_page, go_to_previous_page, page_slice, total_pages,
};
