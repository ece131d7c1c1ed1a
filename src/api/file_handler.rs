//! `POST /file`: classify the data URI under `attachments.url`.

use tracing::{info, warn};

use super::parsing::parse_attachment_request;
use crate::core::models::MimeTypeResponse;
use crate::errors::ApiError;
use crate::utils::mime::classify;

/// Classifies the attachment in a `POST /file` body.
///
/// Only request-shape problems are errors. A URI that cannot be classified
/// is answered with `unknown`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidBody`] for a malformed body and
/// [`ApiError::MissingUrl`] when `attachments` has no `url` key.
pub fn detect_mime_type(body: &str) -> Result<MimeTypeResponse, ApiError> {
    let request = parse_attachment_request(body)?;

    let Some(data_uri) = request.url() else {
        warn!(
            keys = ?request.attachments.keys().collect::<Vec<_>>(),
            "Attachments missing url"
        );
        return Err(ApiError::MissingUrl);
    };

    let category = classify(data_uri);
    info!(category = %category, uri_len = data_uri.len(), "Classified data URI");

    Ok(MimeTypeResponse { category })
}
