//! Constant-answer transport for tests.

use crate::error::TransportError;
use crate::http::{HttpResponse, RequestOptions, Transport};
use crate::types::TodoRecord;

/// Answers every GET with `200` and `TodoRecord::fixture()`.
///
/// The target and options are ignored, so asking for any id other than 168
/// still yields the fixture. The answer is produced synchronously, before
/// `get` returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeTransport;

impl Transport for FakeTransport {
    fn get(&self, _target: &str, _options: &RequestOptions) -> Result<HttpResponse, TransportError> {
        let body = serde_json::to_value(TodoRecord::fixture()).map_err(|e| TransportError::new(e.to_string()))?;
        Ok(HttpResponse {
            status: 200,
            body: Some(body),
        })
    }
}
