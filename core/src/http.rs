//! HTTP transport seam.
//!
//! # Design
//! The fetcher never talks to the network itself. It describes the request as
//! plain data (`HttpRequest`) and hands the target and options to a
//! `Transport`, which answers with an `HttpResponse` or a `TransportError`
//! when nothing came back. Swapping the real transport for `FakeTransport`
//! needs no change to the fetcher.
//!
//! Body decoding follows one rule for every transport: an empty body is
//! `None`, a JSON body is its parsed value, anything else is kept verbatim as
//! a JSON string so the caller still sees what the server sent. Invalid
//! UTF-8 is replaced with U+FFFD before decoding.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{trace, warn};

use crate::error::{FetchError, TransportError};
use crate::types::TodoRecord;

/// Per-request directives passed to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestOptions {
    /// Ask for, and decode, a JSON response body.
    pub json: bool,
}

impl RequestOptions {
    pub fn json() -> Self {
        Self { json: true }
    }
}

/// A GET request described as plain data.
///
/// Built by `TodoFetcher::build_get_todo`; the fetcher passes `target` and
/// `options` straight to `Transport::get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub target: String,
    pub options: RequestOptions,
}

/// Status code and decoded body observed by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body into a `TodoRecord`. An absent body is `Ok(None)`.
    pub fn todo(&self) -> Result<Option<TodoRecord>, FetchError> {
        match &self.body {
            None => Ok(None),
            Some(value) => Ok(Some(TodoRecord::deserialize(value)?)),
        }
    }
}

/// Issues a single GET and reports what came back.
///
/// Any status code, including 4xx and 5xx, is a successful transport result.
/// `Err` is reserved for the case where no response exists.
pub trait Transport {
    fn get(&self, target: &str, options: &RequestOptions) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, target: &str, options: &RequestOptions) -> Result<HttpResponse, TransportError> {
        (**self).get(target, options)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, target: &str, options: &RequestOptions) -> Result<HttpResponse, TransportError> {
        (**self).get(target, options)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, target: &str, options: &RequestOptions) -> Result<HttpResponse, TransportError> {
        (**self).get(target, options)
    }
}

/// Decode a raw response body according to `options`.
pub fn decode_body(raw: &str, options: &RequestOptions) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }
    if options.json {
        match serde_json::from_str(raw) {
            Ok(value) => return Some(value),
            Err(e) => trace!(error = %e, "body is not JSON, keeping raw text"),
        }
    }
    Some(Value::String(raw.to_string()))
}

/// Blocking transport backed by `ureq`.
///
/// Status-code-as-error is disabled so 4xx/5xx responses are returned as
/// data rather than `Err`. Once a status line has arrived the call always
/// succeeds: the body is read without a size limit and decoded lossily, and
/// a body that fails mid-read is reported as `None`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, target: &str, options: &RequestOptions) -> Result<HttpResponse, TransportError> {
        let mut request = self.agent.get(target);
        if options.json {
            request = request.header("accept", "application/json");
        }
        let mut response = request
            .call()
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = match response.body_mut().with_config().limit(u64::MAX).read_to_vec() {
            Ok(bytes) => decode_body(&String::from_utf8_lossy(&bytes), options),
            Err(e) => {
                warn!(target_url = target, status, error = %e, "response body could not be read");
                None
            }
        };

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_decodes_to_none() {
        assert_eq!(decode_body("", &RequestOptions::json()), None);
        assert_eq!(decode_body("", &RequestOptions::default()), None);
    }

    #[test]
    fn json_body_is_parsed_when_requested() {
        let body = decode_body(r#"{"id":1}"#, &RequestOptions::json());
        assert_eq!(body, Some(json!({"id": 1})));
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let body = decode_body("Invalid URL", &RequestOptions::json());
        assert_eq!(body, Some(Value::String("Invalid URL".to_string())));
    }

    #[test]
    fn success_covers_2xx_only() {
        assert!(HttpResponse { status: 204, body: None }.is_success());
        assert!(!HttpResponse { status: 199, body: None }.is_success());
        assert!(!HttpResponse { status: 404, body: None }.is_success());
    }

    #[test]
    fn todo_decodes_absent_body_as_none() {
        let response = HttpResponse { status: 404, body: None };
        assert_eq!(response.todo().unwrap(), None);
    }

    #[test]
    fn todo_rejects_wrong_shape() {
        let response = HttpResponse {
            status: 200,
            body: Some(json!("not a record")),
        };
        assert!(matches!(response.todo().unwrap_err(), FetchError::Decode(_)));
    }

    #[test]
    fn json_body_stays_text_without_directive() {
        let body = decode_body(r#"{"id":1}"#, &RequestOptions::default());
        assert_eq!(body, Some(Value::String(r#"{"id":1}"#.to_string())));
    }
}
