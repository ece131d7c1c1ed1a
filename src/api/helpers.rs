//! Response builders shared by the API handlers.
//!
//! Responses use the API Gateway proxy shape:
//! `{"statusCode": u16, "headers": {..}, "body": String}`.

use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::error;

use crate::errors::ApiError;

/// Returns a response with a JSON-serialized body.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        error!("Failed to serialize response body: {}", e);
        "{}".to_string()
    });
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns a 200 OK response with a JSON body.
#[must_use]
pub fn ok_json<T: Serialize>(body: &T) -> Value {
    json_response(200, body)
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "detail": message }))
}

/// Converts an [`ApiError`] to its error response.
#[must_use]
pub fn api_error_response(err: &ApiError) -> Value {
    err_response(err.status_code(), &err.to_string())
}

/// Returns a plain-text response.
#[must_use]
pub fn text_response(status_code: u16, text: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "text/plain; charset=utf-8" },
        "body": text
    })
}

/// Merges `extra` into the response's `headers` object.
#[must_use]
pub fn with_headers(mut response: Value, extra: Map<String, Value>) -> Value {
    if extra.is_empty() {
        return response;
    }
    if let Some(obj) = response.as_object_mut() {
        let headers = obj
            .entry("headers")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(map) = headers.as_object_mut() {
            map.extend(extra);
        }
    }
    response
}
