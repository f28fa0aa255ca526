use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub error: Color32,
    pub disabled: Color32,
    pub central_panel: Color32,
    pub bottom_panel: Color32,
    /// Background of every other table row
    pub stripe: Color32,
}

#[derive(Clone, Copy, Default)]
pub struct UiSizes {
    pub heading: f32,
    pub loading: f32,
    pub header_row_height: f32,
    pub row_height: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub sizes: UiSizes,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(30, 30, 30),
        heading: Color32::from_rgb(15, 23, 42), // slate-900
        subdued: Color32::from_rgb(100, 100, 110),
        error: Color32::from_rgb(239, 68, 68), // red-500
        disabled: Color32::from_rgb(156, 163, 175), // gray-400
        central_panel: Color32::WHITE,
        bottom_panel: Color32::WHITE,
        stripe: Color32::from_rgb(229, 231, 235), // gray-200
    },
    sizes: UiSizes {
        heading: 24.0,
        loading: 20.0,
        header_row_height: 28.0,
        row_height: 26.0,
    },
};

impl UiConfig {
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(24),
            ..Default::default()
        }
    }

    /// Frame for the pager strip (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.bottom_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(24, 10),
            ..Default::default()
        }
    }
}
