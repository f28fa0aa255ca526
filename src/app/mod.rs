mod phases;
mod root;
mod state;

pub use root::App;
pub use state::{AppState, FailedState, LoadedState, LoadingState};
