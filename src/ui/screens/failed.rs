use eframe::egui::{CentralPanel, Context, RichText};

use crate::ui::{UI_CONFIG, UI_TEXT};

/// Terminal screen shown when the tickers could not be loaded.
pub(crate) fn render_failed(ctx: &Context, message: &str) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(format!("{} {}", UI_TEXT.error_prefix, message))
                        .color(UI_CONFIG.colors.error),
                );
            });
        });
}
