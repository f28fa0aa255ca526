use eframe::egui::Context;

use crate::{
    app::{App, phases::PhaseView, state::AppState, state::FailedState},
    ui::render_failed,
};

impl PhaseView for FailedState {
    fn tick(self, _app: &mut App, ctx: &Context) -> AppState {
        render_failed(ctx, &self.message);
        AppState::Failed(self)
    }
}
