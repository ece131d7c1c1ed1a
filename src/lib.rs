//! MIME Type Detector - classifies data URIs by their declared media type.
//!
//! The crate runs as an AWS Lambda behind API Gateway and answers:
//! - `POST /file` with `{"attachments": {"url": "data:..."}}`, returning
//!   `{"type": "image" | "text" | "application" | "unknown"}`
//! - `GET /` with a health payload
//!
//! # Architecture
//!
//! - `utils` holds the data URI parser and the category classifier. They are
//!   pure functions with no I/O.
//! - `api` routes proxy events, applies the CORS policy, and builds responses
//! - `core` holds configuration and the request/response models
//!
//! # Example
//!
//! ```
//! use mime_detector::utils::mime::{MimeCategory, classify};
//!
//! assert_eq!(classify("data:image/png;base64,iVBORw0KGgo="), MimeCategory::Image);
//! assert_eq!(classify("data:image,AAA"), MimeCategory::Unknown);
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod utils;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`).
/// Calling it more than once is harmless; later calls are ignored.
///
/// # Example
///
/// ```
/// mime_detector::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
