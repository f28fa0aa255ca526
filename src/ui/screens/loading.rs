use eframe::egui::{CentralPanel, Context, RichText};

use crate::ui::{UI_CONFIG, UI_TEXT};

pub(crate) fn render_loading(ctx: &Context) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.horizontal_centered(|ui| {
                    ui.spinner();
                    ui.label(
                        RichText::new(&UI_TEXT.loading)
                            .size(UI_CONFIG.sizes.loading)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                });
            });
        });
}
