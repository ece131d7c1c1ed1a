//! API Lambda handler - thin router over the detector routes.
//!
//! This module handles:
//! - CORS preflight and response headers (delegated to `cors`)
//! - `GET /` health probe
//! - `POST /file` classification (delegated to `file_handler`)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::{file_handler, helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::HealthStatus;
use crate::errors::ApiError;

/// Lambda handler for the API entrypoint.
///
/// Always answers with an API Gateway proxy response; request problems become
/// 4xx responses rather than Lambda errors.
///
/// # Errors
///
/// Never returns an error for request content. The `Result` matches the
/// `lambda_runtime` service signature.
#[tracing::instrument(level = "info", skip(config, event), fields(correlation_id))]
pub async fn function_handler(
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("correlation_id", correlation_id.as_str());

    Ok(route(config, &event.payload))
}

/// Routes an API Gateway event and applies CORS headers to the result.
#[must_use]
pub fn route(config: &AppConfig, payload: &Value) -> Value {
    let method = parsing::request_method(payload).unwrap_or_default();
    let path = parsing::request_path(payload);
    let origin = parsing::get_header_value(payload, "Origin");

    info!(method = %method, path = ?path, origin = ?origin, "API request");

    // ========================================================================
    // CORS preflight
    // ========================================================================

    if method == "OPTIONS"
        && let Some(origin) = origin
        && parsing::get_header_value(payload, "Access-Control-Request-Method").is_some()
    {
        let requested = parsing::get_header_value(payload, "Access-Control-Request-Headers");
        return match config.cors.preflight_headers(origin, requested) {
            Ok(headers) => helpers::with_headers(helpers::text_response(200, "OK"), headers),
            Err(e) => {
                info!(origin = %origin, "Rejected preflight: {}", e);
                helpers::text_response(e.status_code(), &e.to_string())
            }
        };
    }

    // ========================================================================
    // Routes
    // ========================================================================

    let response = match (method.as_str(), path) {
        ("GET", Some("/")) => helpers::ok_json(&HealthStatus::healthy(&config.service_name)),
        ("POST", Some("/file")) => handle_file(payload),
        (_, Some("/" | "/file")) => helpers::api_error_response(&ApiError::MethodNotAllowed),
        _ => helpers::api_error_response(&ApiError::NotFound),
    };

    helpers::with_headers(response, config.cors.response_headers(origin))
}

fn handle_file(payload: &Value) -> Value {
    let result = parsing::extract_body(payload)
        .and_then(|body| file_handler::detect_mime_type(&body));

    match result {
        Ok(resp) => helpers::ok_json(&resp),
        Err(e) => {
            error!(status = e.status_code(), "Rejected /file request: {}", e);
            helpers::api_error_response(&e)
        }
    }
}
