//! Accessors for API Gateway proxy events (HTTP API v2 and REST v1 shapes).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::AttachmentRequest;
use crate::errors::ApiError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method, upper-cased.
#[must_use]
pub fn request_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

#[must_use]
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Case-insensitive header lookup.
pub fn get_header_value<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    let headers = payload.get("headers")?;
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Request body as text, base64-decoded when the gateway flagged it.
///
/// # Errors
///
/// Returns [`ApiError::InvalidBody`] if the body is absent, not a string, or
/// not valid base64/UTF-8 when flagged as encoded.
pub fn extract_body(payload: &Value) -> Result<String, ApiError> {
    let Some(body) = payload.get("body").and_then(|b| b.as_str()) else {
        return Err(ApiError::InvalidBody("Missing body".to_string()));
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| ApiError::InvalidBody(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes).map_err(|e| ApiError::InvalidBody(format!("Body is not UTF-8: {e}")))
}

/// Parses a `POST /file` body.
///
/// # Errors
///
/// Returns [`ApiError::InvalidBody`] when the JSON does not match
/// `{"attachments": {<string>: <string>}}`.
pub fn parse_attachment_request(body: &str) -> Result<AttachmentRequest, ApiError> {
    Ok(serde_json::from_str(body)?)
}
