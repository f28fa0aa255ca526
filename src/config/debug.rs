//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log request/response details of the tickers fetch.
    pub log_fetch: bool,

    /// Log every page change (buttons and arrow keys).
    pub log_navigation: bool,

    /// Log each state transition out of Loading.
    pub log_state: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_navigation: false,
    log_state: true,
};
