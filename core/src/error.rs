//! Error types for the todo fetcher.
//!
//! # Design
//! Only two things can go wrong. Either no response came back at all
//! (`Transport`), or the caller asked for a typed record and the body does
//! not have that shape (`Decode`). Non-2xx statuses are not errors here; they
//! reach the caller as data inside `HttpResponse`.

use thiserror::Error;

/// Raised by a `Transport` when no HTTP response was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by `TodoFetcher`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect or I/O failure: there is no status code to report.
    #[error("request to {target} failed: {source}")]
    Transport {
        target: String,
        #[source]
        source: TransportError,
    },

    /// The response body could not be decoded into a `TodoRecord`.
    #[error("body is not a todo record: {0}")]
    Decode(#[from] serde_json::Error),
}
