use eframe::egui::{Align, Button, Direction, Key, Layout, RichText, Ui};

use crate::{
    models::CoinTable,
    ui::{UI_CONFIG, UI_TEXT},
};

/// A request to move one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Previous,
    Next,
}

impl PageNav {
    pub const KEYS: [Key; 2] = [Key::ArrowLeft, Key::ArrowRight];

    pub fn apply(self, table: CoinTable) -> CoinTable {
        match self {
            PageNav::Previous => table.previous_page(),
            PageNav::Next => table.next_page(),
        }
    }

    /// Arrow key equivalent of the pager buttons.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowLeft => Some(PageNav::Previous),
            Key::ArrowRight => Some(PageNav::Next),
            _ => None,
        }
    }
}

/// "Page X of Y", or "Page 1 of 1" when the list is empty.
pub fn page_label(table: &CoinTable) -> String {
    format!(
        "{} {} {} {}",
        UI_TEXT.pager_page,
        table.page(),
        UI_TEXT.pager_of,
        table.total_pages().max(1)
    )
}

/// "Showing 11-20 of 100". `None` for an empty list.
pub fn range_label(table: &CoinTable) -> Option<String> {
    let shown = table.visible().len();
    if shown == 0 {
        return None;
    }
    let first = table.first_rank();
    Some(format!(
        "{} {}-{} {} {}",
        UI_TEXT.pager_showing,
        first,
        first + shown - 1,
        UI_TEXT.pager_of,
        table.len()
    ))
}

/// Previous on the left, Next on the right, each disabled at its bound.
pub(crate) fn render_pager(ui: &mut Ui, table: &CoinTable) -> Option<PageNav> {
    let mut nav = None;
    ui.horizontal(|ui| {
        let previous = ui
            .add_enabled(
                table.has_previous(),
                Button::new(nav_text(&UI_TEXT.pager_previous, table.has_previous())).frame(false),
            )
            .on_hover_text(UI_TEXT.pager_shortcut_hint.as_str());
        if previous.clicked() {
            nav = Some(PageNav::Previous);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let next = ui
                .add_enabled(
                    table.has_next(),
                    Button::new(nav_text(&UI_TEXT.pager_next, table.has_next())).frame(false),
                )
                .on_hover_text(UI_TEXT.pager_shortcut_hint.as_str());
            if next.clicked() {
                nav = Some(PageNav::Next);
            }

            ui.with_layout(Layout::centered_and_justified(Direction::LeftToRight), |ui| {
                let mut status = page_label(table);
                if let Some(range) = range_label(table) {
                    status = format!("{}  ({})", status, range);
                }
                ui.label(RichText::new(status).color(UI_CONFIG.colors.subdued));
            });
        });
    });
    nav
}

fn nav_text(text: &str, enabled: bool) -> RichText {
    let color = if enabled {
        UI_CONFIG.colors.label
    } else {
        UI_CONFIG.colors.disabled
    };
    RichText::new(text).strong().color(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoinList, CoinRecord};

    fn table(n: usize) -> CoinTable {
        CoinTable::new(CoinList::new(
            (0..n)
                .map(|i| CoinRecord::new(i.to_string(), "c", "C", "1", "1"))
                .collect(),
        ))
    }

    #[test]
    fn arrow_keys_map_to_navigation() {
        assert_eq!(PageNav::from_key(Key::ArrowLeft), Some(PageNav::Previous));
        assert_eq!(PageNav::from_key(Key::ArrowRight), Some(PageNav::Next));
        assert_eq!(PageNav::from_key(Key::Enter), None);
    }

    #[test]
    fn apply_moves_the_table() {
        let t = PageNav::Next.apply(table(25));
        assert_eq!(t.page(), 2);
        let t = PageNav::Previous.apply(t);
        assert_eq!(t.page(), 1);
    }

    #[test]
    fn labels() {
        let t = table(25).at_page(3);
        assert_eq!(page_label(&t), "Page 3 of 3");
        assert_eq!(range_label(&t).as_deref(), Some("Showing 21-25 of 25"));
    }

    #[test]
    fn labels_for_empty_list() {
        let t = table(0);
        assert_eq!(page_label(&t), "Page 1 of 1");
        assert_eq!(range_label(&t), None);
    }
}
