use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop the tickers list from reaching the table.
///
/// The UI never inspects the variant; it only shows the `Display` text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-success status. The body is not read.
    #[error("Network response was not ok ({0})")]
    Status(StatusCode),

    /// The body was not the `{ "data": [...] }` shape we expect.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The background fetch never got to report a result.
    #[error("Fetch worker failed: {0}")]
    Worker(String),
}

pub type FetchOutcome<T> = Result<T, FetchError>;
