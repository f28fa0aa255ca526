use crate::{
    config::PAGE_SIZE,
    domain::{CoinList, CoinRecord, TickersInfo},
    models::{PageState, page_slice, total_pages},
};

/// The fetched coin list together with the page currently on screen.
///
/// Navigation consumes the table and returns the updated one, so a page index
/// never outlives the list it was computed against.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinTable {
    coins: Vec<CoinRecord>,
    info: Option<TickersInfo>,
    page_size: usize,
    page: PageState,
}

impl CoinTable {
    pub fn new(list: CoinList) -> Self {
        Self::with_page_size(list, PAGE_SIZE)
    }

    pub fn with_page_size(list: CoinList, page_size: usize) -> Self {
        CoinTable {
            coins: list.coins,
            info: list.info,
            page_size,
            page: PageState::default(),
        }
    }

    /// Jump straight to `page`, clamped into range.
    pub fn at_page(mut self, page: usize) -> Self {
        self.page = PageState::new(page, self.total_pages());
        self
    }

    pub fn previous_page(mut self) -> Self {
        self.page = self.page.previous();
        self
    }

    pub fn next_page(mut self) -> Self {
        self.page = self.page.next(self.total_pages());
        self
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.coins.len(), self.page_size)
    }

    /// Rows for the current page, in upstream order.
    pub fn visible(&self) -> &[CoinRecord] {
        page_slice(&self.coins, self.page.get(), self.page_size)
    }

    /// 1-based position of the first visible row within the whole list.
    pub fn first_rank(&self) -> usize {
        (self.page.get() - 1) * self.page_size + 1
    }

    pub fn has_previous(&self) -> bool {
        !self.page.is_first()
    }

    pub fn has_next(&self) -> bool {
        !self.page.is_last(self.total_pages())
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn info(&self) -> Option<TickersInfo> {
        self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(n: usize) -> CoinList {
        CoinList::new(
            (0..n)
                .map(|i| {
                    CoinRecord::new(
                        i.to_string(),
                        format!("Coin {i}"),
                        format!("C{i}"),
                        "1.0",
                        "1000000",
                    )
                })
                .collect(),
        )
    }

    fn ids(table: &CoinTable) -> Vec<usize> {
        table
            .visible()
            .iter()
            .map(|c| c.id.parse().unwrap())
            .collect()
    }

    #[test]
    fn starts_on_first_page() {
        let table = CoinTable::new(list(25));
        assert_eq!(table.page(), 1);
        assert_eq!(table.total_pages(), 3);
        assert_eq!(ids(&table), (0..10).collect::<Vec<_>>());
        assert!(!table.has_previous());
        assert!(table.has_next());
    }

    #[test]
    fn last_page_is_partial() {
        let table = CoinTable::new(list(25)).next_page().next_page();
        assert_eq!(table.page(), 3);
        assert_eq!(ids(&table), vec![20, 21, 22, 23, 24]);
        assert_eq!(table.first_rank(), 21);
        assert!(!table.has_next());
    }

    #[test]
    fn navigation_saturates_at_both_ends() {
        let table = CoinTable::new(list(25)).next_page().next_page().next_page();
        assert_eq!(table.page(), 3);
        let table = table.previous_page().previous_page().previous_page();
        assert_eq!(table.page(), 1);
    }

    #[test]
    fn empty_list_is_inert() {
        let table = CoinTable::new(list(0));
        assert_eq!(table.total_pages(), 0);
        assert!(table.visible().is_empty());
        assert!(!table.has_previous());
        assert!(!table.has_next());
        let moved = table.clone().next_page().previous_page();
        assert_eq!(moved, table);
    }

    #[test]
    fn at_page_clamps() {
        assert_eq!(CoinTable::new(list(25)).at_page(0).page(), 1);
        assert_eq!(CoinTable::new(list(25)).at_page(2).page(), 2);
        assert_eq!(CoinTable::new(list(25)).at_page(99).page(), 3);
        assert_eq!(CoinTable::new(list(0)).at_page(4).page(), 1);
    }

    #[test]
    fn custom_page_size() {
        let table = CoinTable::with_page_size(list(7), 3).at_page(3);
        assert_eq!(table.page_size(), 3);
        assert_eq!(ids(&table), vec![6]);
    }
}
