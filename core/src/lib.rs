//! Client wrapper for fetching a single todo record.
//!
//! # Overview
//! `TodoFetcher` turns an id into `GET {base_url}/todos/{id}`, sends it
//! through an injected `Transport`, and hands back the status code and
//! parsed body exactly as the transport observed them.
//!
//! # Design
//! - `TodoFetcher` is stateless apart from its config and transport.
//! - The transport is a trait so `UreqTransport` (real network) and
//!   `FakeTransport` (constant answer) are interchangeable.
//! - Non-2xx statuses are data. Only "no response at all" is an error.
//! - `TodoRecord` is defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod fake;
pub mod http;
pub mod types;

pub use client::TodoFetcher;
pub use config::{FetcherConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{FetchError, TransportError};
pub use fake::FakeTransport;
pub use http::{HttpRequest, HttpResponse, RequestOptions, Transport, UreqTransport};
pub use types::TodoRecord;
