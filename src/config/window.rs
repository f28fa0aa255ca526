//! Native window configuration

pub struct WindowConfig {
    /// Application id passed to eframe
    pub app_name: &'static str,
    /// Title bar text
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

pub const WINDOW: WindowConfig = WindowConfig {
    app_name: "Coin Table",
    title: "Coin Table - Cryptocurrency Prices",
    inner_size: [760.0, 560.0],
    min_inner_size: [520.0, 380.0],
};
