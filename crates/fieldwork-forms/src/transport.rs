//! The submission collaborator contract.

use std::future::Future;
use std::pin::Pin;

use serde_json::{Map, Value};

use crate::error::{FormsError, Result};

/// A boxed future for async collaborator operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Sends a payload to an endpoint and resolves to the parsed JSON
/// response, or rejects with a normalized [`FormsError::Transport`].
///
/// Implementations own the wire details; [`normalize_response`] turns a
/// raw status/body pair into this contract's result shape.
pub trait Transport: Send + Sync {
    /// Submits `payload` to `url` with the given HTTP verb.
    fn send<'a>(
        &'a self,
        url: &'a str,
        method: &'a str,
        payload: &'a Map<String, Value>,
    ) -> BoxFuture<'a, Result<Value>>;
}

/// Normalizes an HTTP response: 2xx parses the body as JSON (an empty
/// or non-JSON body resolves to null), anything else becomes a
/// transport error carrying the server's `message` or `error` field
/// when present, or a status-derived generic otherwise.
pub fn normalize_response(status: u16, body: &str) -> Result<Value> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body).unwrap_or(Value::Null));
    }

    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|parsed| {
            parsed
                .get("message")
                .or_else(|| parsed.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    Err(FormsError::Transport { message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_parses_json() {
        let value = normalize_response(200, r#"{"id": 7}"#).unwrap();
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn test_success_with_empty_body() {
        assert_eq!(normalize_response(204, "").unwrap(), Value::Null);
    }

    #[test]
    fn test_failure_uses_server_message() {
        let err = normalize_response(422, r#"{"message": "End before start"}"#).unwrap_err();
        assert_eq!(err.to_string(), "End before start");
    }

    #[test]
    fn test_failure_uses_error_field() {
        let err = normalize_response(400, r#"{"error": "bad payload"}"#).unwrap_err();
        assert_eq!(err.to_string(), "bad payload");
    }

    #[test]
    fn test_failure_falls_back_to_status() {
        let err = normalize_response(500, "<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 500");
    }
}
