//! Single-resource fetcher for the todo API.
//!
//! # Design
//! `TodoFetcher` holds a `FetcherConfig` and an injected `Transport` and
//! carries no mutable state between calls. `build_get_todo` produces the
//! request as plain data; `get_todo` hands it to the transport and returns
//! the transport's `HttpResponse` unchanged. Typed decoding is left to the
//! caller through `HttpResponse::todo`.

use std::fmt::Display;

use tracing::{info, trace, warn};

use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse, RequestOptions, Transport};

/// Fetches todo records through an injected transport.
#[derive(Debug, Clone)]
pub struct TodoFetcher<T> {
    config: FetcherConfig,
    transport: T,
}

impl<T: Transport> TodoFetcher<T> {
    pub fn new(config: FetcherConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Build the GET for `{base_url}/todos/{id}`. `id` is substituted as its
    /// `Display` output with no escaping.
    pub fn build_get_todo(&self, id: impl Display) -> HttpRequest {
        HttpRequest {
            target: format!("{}/todos/{id}", self.config.base_url()),
            options: RequestOptions::json(),
        }
    }

    /// Issue exactly one GET for `id` and return what the transport saw.
    ///
    /// Non-2xx statuses and non-record bodies are returned as data. `Err` is
    /// only produced when the transport received no response.
    pub fn get_todo(&self, id: impl Display) -> Result<HttpResponse, FetchError> {
        let request = self.build_get_todo(id);
        info!(target_url = %request.target, "Calling: {}", request.target);

        match self.transport.get(&request.target, &request.options) {
            Ok(response) => {
                trace!(status = response.status, "todo response received");
                Ok(response)
            }
            Err(source) => {
                warn!(target_url = %request.target, error = %source, "todo request failed");
                Err(FetchError::Transport {
                    target: request.target,
                    source,
                })
            }
        }
    }

    /// Callback form of `get_todo`. `callback` runs once, after the
    /// transport has completed.
    pub fn get_todo_then<F>(&self, id: impl Display, callback: F)
    where
        F: FnOnce(Result<HttpResponse, FetchError>),
    {
        callback(self.get_todo(id))
    }
}
