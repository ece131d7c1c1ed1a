use thiserror::Error;

/// Request-level failures surfaced to the caller as non-200 responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing 'url' in attachments")]
    MissingUrl,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Disallowed CORS origin")]
    DisallowedOrigin,
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingUrl | ApiError::DisallowedOrigin => 400,
            ApiError::InvalidBody(_) => 422,
            ApiError::NotFound => 404,
            ApiError::MethodNotAllowed => 405,
        }
    }
}

/// Reasons a string could not be read as a data URI.
///
/// These never reach a caller: classification folds every variant into
/// `MimeCategory::Unknown`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataUriError {
    #[error("input is not a data URI")]
    NotDataUri,

    #[error("data URI declares no media type")]
    MissingMediaType,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name}: invalid value {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::InvalidBody(error.to_string())
    }
}
