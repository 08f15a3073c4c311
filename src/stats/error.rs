//! Data client error types

use thiserror::Error;

/// Errors a [`StatsSource`](super::StatsSource) can report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// The body was not a stats object
    #[error("Parse error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type alias for stats fetches
pub type FetchResult<T> = Result<T, FetchError>;
