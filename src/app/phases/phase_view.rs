use eframe::egui::Context;

use crate::app::App;
use crate::app::state::AppState;

pub(crate) trait PhaseView {
    /// Draw one frame of this phase and return the state for the next frame.
    fn tick(self, app: &mut App, ctx: &Context) -> AppState;
}
