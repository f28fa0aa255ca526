//! Page arithmetic for the coin table.
//!
//! Pages are 1-based. Every navigation result stays inside
//! `[1, max(1, total_pages)]`, so an empty list still sits on page 1 and both
//! directions are no-ops there.

/// `ceil(len / page_size)`. Zero for an empty list. A zero page size yields zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The window `[(page-1)*page_size, page*page_size)` clipped to `list`.
///
/// Out-of-range pages (including page 0) give an empty slice rather than an error.
pub fn page_slice<T>(list: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
    else {
        return &[];
    };
    if start >= list.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// One page back, never below 1.
pub fn go_to_previous_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}

/// One page forward, never past the last page (or page 1 when there are none).
pub fn go_to_next_page(current: usize, total_pages: usize) -> usize {
    current.saturating_add(1).min(total_pages.max(1))
}

/// A page number that always satisfies `1 <= page <= max(1, total_pages)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageState(usize);

impl Default for PageState {
    fn default() -> Self {
        PageState(1)
    }
}

impl PageState {
    /// Clamp `page` into range for a list with `total_pages` pages.
    pub fn new(page: usize, total_pages: usize) -> Self {
        PageState(page.clamp(1, total_pages.max(1)))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn previous(self) -> Self {
        PageState(go_to_previous_page(self.0))
    }

    pub fn next(self, total_pages: usize) -> Self {
        PageState(go_to_next_page(self.0, total_pages))
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    pub fn is_last(self, total_pages: usize) -> bool {
        self.0 >= total_pages.max(1)
    }
}
