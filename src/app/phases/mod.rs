pub(super) mod failed;
pub(super) mod loaded;
pub(super) mod loading;
pub(super) mod phase_view;

pub(crate) use phase_view::PhaseView;
