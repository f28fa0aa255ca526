use {
    eframe::{
        Frame,
        egui::{CentralPanel, Context, TopBottomPanel, Visuals},
    },
    std::{
        mem,
        sync::mpsc::{self, Receiver, Sender, TryRecvError},
        thread,
    },
    tokio::runtime::Builder,
};

use crate::{
    Cli,
    app::{AppState, LoadedState, LoadingState, phases::PhaseView},
    data::{FetchError, FetchOutcome, fetch_from_coinlore},
    domain::CoinList,
    ui::{
        PageNav, UI_CONFIG, render_coin_table, render_heading, render_loading, render_pager,
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Default)]
pub struct App {
    state: AppState,
    data_rx: Option<Receiver<FetchOutcome<CoinList>>>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let (data_tx, data_rx) = mpsc::channel();
        spawn_fetch_worker(data_tx, cc.egui_ctx.clone());

        Self {
            state: AppState::loading(args.page),
            data_rx: Some(data_rx),
        }
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context, state: LoadingState) -> AppState {
        if let Some(next_state) = self.finalize_fetch_if_ready(&state) {
            ctx.request_repaint();
            return next_state;
        }
        render_loading(ctx);
        AppState::Loading(state)
    }

    /// Poll the worker. Returns the settled state once, then drops the receiver.
    fn finalize_fetch_if_ready(&mut self, state: &LoadingState) -> Option<AppState> {
        let rx = self.data_rx.as_ref()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(FetchError::Worker(
                "fetch thread exited without a result".to_string(),
            )),
        };
        self.data_rx = None;
        Some(state.clone().resolve(outcome))
    }

    pub(crate) fn tick_loaded_state(&mut self, ctx: &Context, state: LoadedState) -> AppState {
        let mut nav = self.handle_global_shortcuts(ctx);

        TopBottomPanel::bottom("pager_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(clicked) = render_pager(ui, &state.table) {
                    nav = Some(clicked);
                }
            });

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                render_heading(ui, &state.table);
                render_coin_table(ui, &state.table);
            });

        let Some(nav) = nav else {
            return AppState::Loaded(state);
        };

        let before = state.table.page();
        let table = nav.apply(state.table);
        #[cfg(debug_assertions)]
        if DF.log_navigation {
            log::info!("{:?}: page {} -> {}", nav, before, table.page());
        }
        if table.page() != before {
            ctx.request_repaint();
        }
        AppState::Loaded(LoadedState { table })
    }

    /// Left/Right arrows page like the buttons.
    pub(crate) fn handle_global_shortcuts(&self, ctx: &Context) -> Option<PageNav> {
        if ctx.wants_keyboard_input() {
            return None;
        }

        ctx.input(|i| {
            PageNav::KEYS
                .into_iter()
                .filter(|key| i.key_pressed(*key))
                .find_map(PageNav::from_key)
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(s) => s.tick(self, ctx),
            AppState::Failed(s) => s.tick(self, ctx),
            AppState::Loaded(s) => s.tick(self, ctx),
        };
    }
}

/// Run the one and only fetch on its own thread with a single-use runtime.
///
/// If the window is closed first the receiver is gone; the result is then dropped.
fn spawn_fetch_worker(data_tx: Sender<FetchOutcome<CoinList>>, ctx: Context) {
    thread::spawn(move || {
        let outcome = match Builder::new_current_thread().enable_all().build() {
            Ok(rt) => rt.block_on(fetch_from_coinlore()),
            Err(e) => {
                log::error!("Failed to create runtime: {}", e);
                Err(FetchError::Worker(format!("could not start runtime: {}", e)))
            }
        };

        if data_tx.send(outcome).is_err() {
            log::debug!("View closed before the fetch finished; result discarded");
            return;
        }
        ctx.request_repaint();
    });
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.faint_bg_color = UI_CONFIG.colors.stripe;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
