use std::sync::LazyLock;

pub const ICON_PREVIOUS: &str = "⬅";
pub const ICON_NEXT: &str = "➡";

pub struct UiText {
    pub heading: String,
    pub loading: String,
    pub error_prefix: String,
    pub no_coins: String,

    // --- Pager ---
    pub pager_previous: String,
    pub pager_next: String,
    pub pager_page: String,
    pub pager_of: String,
    pub pager_showing: String,
    pub pager_shortcut_hint: String,

    // --- Header info line ---
    pub info_coins_tracked: String,
    pub info_updated: String,
    pub info_ago: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    heading: "Cryptocurrency Prices".to_string(),
    loading: "Loading...".to_string(),
    error_prefix: "Error:".to_string(),
    no_coins: "No coins returned.".to_string(),

    pager_previous: format!("{} Previous", ICON_PREVIOUS),
    pager_next: format!("Next {}", ICON_NEXT),
    pager_page: "Page".to_string(),
    pager_of: "of".to_string(),
    pager_showing: "Showing".to_string(),
    pager_shortcut_hint: "Use the left/right arrow keys to change page".to_string(),

    info_coins_tracked: "coins tracked".to_string(),
    info_updated: "updated".to_string(),
    info_ago: "ago".to_string(),
});
