use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::LoadedState};

impl PhaseView for LoadedState {
    fn tick(self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_loaded_state(ctx, self)
    }
}
