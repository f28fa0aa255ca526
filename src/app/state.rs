// src/app/state.rs

use crate::{
    data::{FetchError, FetchOutcome},
    domain::CoinList,
    models::CoinTable,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingState {
    /// Page to open once the list arrives (from `--page`).
    pub start_page: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedState {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedState {
    pub table: CoinTable,
}

/// Whole-view state. Starts in `Loading` and leaves it exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Loading(LoadingState),
    Failed(FailedState),
    Loaded(LoadedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState { start_page: 1 })
    }
}

impl AppState {
    pub fn loading(start_page: usize) -> Self {
        AppState::Loading(LoadingState { start_page })
    }

    /// Apply the fetch result. Only a `Loading` state reacts; any later
    /// result is ignored so the view can't be replaced after it settled.
    pub fn on_fetch_complete(self, outcome: FetchOutcome<CoinList>) -> Self {
        match self {
            AppState::Loading(loading) => loading.resolve(outcome),
            settled => {
                log::warn!("Ignoring fetch result: view already settled");
                settled
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AppState::Loading(_))
    }

    pub fn table(&self) -> Option<&CoinTable> {
        match self {
            AppState::Loaded(loaded) => Some(&loaded.table),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AppState::Failed(failed) => Some(&failed.message),
            _ => None,
        }
    }
}

impl LoadingState {
    pub fn resolve(self, outcome: FetchOutcome<CoinList>) -> AppState {
        let next = match outcome {
            Ok(list) => AppState::Loaded(LoadedState {
                table: CoinTable::new(list).at_page(self.start_page),
            }),
            Err(e) => AppState::Failed(FailedState::from(e)),
        };
        #[cfg(debug_assertions)]
        if DF.log_state {
            match &next {
                AppState::Loaded(l) => log::info!(
                    "Loading -> Loaded ({} coins, {} pages)",
                    l.table.len(),
                    l.table.total_pages()
                ),
                AppState::Failed(f) => log::info!("Loading -> Failed ({})", f.message),
                AppState::Loading(_) => {}
            }
        }
        next
    }
}

impl From<FetchError> for FailedState {
    fn from(e: FetchError) -> Self {
        FailedState {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CoinRecord;
    use reqwest::StatusCode;

    fn list(n: usize) -> CoinList {
        CoinList::new(
            (0..n)
                .map(|i| CoinRecord::new(i.to_string(), "c", "C", "1", "1"))
                .collect(),
        )
    }

    #[test]
    fn starts_loading_on_page_one() {
        let state = AppState::default();
        assert!(state.is_loading());
        assert_eq!(state, AppState::loading(1));
        assert!(state.table().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn success_loads_the_table() {
        let state = AppState::default().on_fetch_complete(Ok(list(25)));
        let table = state.table().unwrap();
        assert_eq!(table.page(), 1);
        assert_eq!(table.total_pages(), 3);
        assert_eq!(table.visible().len(), 10);
    }

    #[test]
    fn start_page_is_clamped_on_load() {
        let state = AppState::loading(7).on_fetch_complete(Ok(list(25)));
        assert_eq!(state.table().unwrap().page(), 3);
        let state = AppState::loading(0).on_fetch_complete(Ok(list(0)));
        assert_eq!(state.table().unwrap().page(), 1);
    }

    #[test]
    fn server_error_fails_without_a_table() {
        let state = AppState::default()
            .on_fetch_complete(Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
        assert!(state.table().is_none());
        let message = state.error_message().unwrap();
        assert!(!message.is_empty());
    }

    #[test]
    fn malformed_payload_fails() {
        let parse_err = serde_json::from_str::<CoinList>(r#"{"data": 5}"#).unwrap_err();
        let state = AppState::default().on_fetch_complete(Err(parse_err.into()));
        assert!(state.error_message().unwrap().starts_with("Malformed response"));
    }

    #[test]
    fn transitions_only_once() {
        let loaded = AppState::default().on_fetch_complete(Ok(list(3)));
        let again = loaded
            .clone()
            .on_fetch_complete(Err(FetchError::Worker("late".into())));
        assert_eq!(again, loaded);

        let failed =
            AppState::default().on_fetch_complete(Err(FetchError::Worker("boom".into())));
        let again = failed.clone().on_fetch_complete(Ok(list(3)));
        assert_eq!(again, failed);
    }
}
