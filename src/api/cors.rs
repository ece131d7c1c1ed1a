//! Cross-origin policy applied to every response.
//!
//! The policy is built once from [`AppConfig`](crate::core::config::AppConfig)
//! at cold start and only read afterwards.

use serde_json::{Map, Value};

use crate::errors::ApiError;

/// Methods advertised to preflight requests when any method is allowed.
pub const ALL_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";

pub const DEFAULT_MAX_AGE_SECS: u32 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowOrigins {
    Any,
    List(Vec<String>),
}

/// Any method and any header are always allowed; only origins and
/// credentials are configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_origins: AllowOrigins,
    pub allow_credentials: bool,
    pub max_age_secs: u32,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

impl CorsPolicy {
    /// Any origin, any method, any header, credentials allowed.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            allow_origins: AllowOrigins::Any,
            allow_credentials: true,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }

    /// Whether this is the default any-origin, credentialed policy.
    #[must_use]
    pub fn is_permissive(&self) -> bool {
        self.allow_origins == AllowOrigins::Any && self.allow_credentials
    }

    #[must_use]
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        match &self.allow_origins {
            AllowOrigins::Any => true,
            AllowOrigins::List(list) => list.iter().any(|o| o == origin),
        }
    }

    /// Value for `Access-Control-Allow-Origin`, or `None` if the origin is
    /// not allowed. Credentialed requests cannot use `*`, so the origin is
    /// echoed back instead.
    fn allow_origin_value(&self, origin: &str) -> Option<String> {
        if !self.is_origin_allowed(origin) {
            return None;
        }
        match self.allow_origins {
            AllowOrigins::Any if !self.allow_credentials => Some("*".to_string()),
            _ => Some(origin.to_string()),
        }
    }

    /// Headers added to an ordinary (non-preflight) response.
    ///
    /// Requests without an `Origin` header get no CORS headers.
    #[must_use]
    pub fn response_headers(&self, origin: Option<&str>) -> Map<String, Value> {
        let mut headers = Map::new();
        let Some(origin) = origin else {
            return headers;
        };
        let Some(allow) = self.allow_origin_value(origin) else {
            return headers;
        };

        if allow != "*" {
            headers.insert("Vary".into(), Value::from("Origin"));
        }
        headers.insert("Access-Control-Allow-Origin".into(), Value::from(allow));
        if self.allow_credentials {
            headers.insert(
                "Access-Control-Allow-Credentials".into(),
                Value::from("true"),
            );
        }
        headers
    }

    /// Headers answering a preflight request.
    ///
    /// `requested_headers` is the raw `Access-Control-Request-Headers` value
    /// and is echoed back verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DisallowedOrigin`] when the origin is not allowed.
    pub fn preflight_headers(
        &self,
        origin: &str,
        requested_headers: Option<&str>,
    ) -> Result<Map<String, Value>, ApiError> {
        let allow = self
            .allow_origin_value(origin)
            .ok_or(ApiError::DisallowedOrigin)?;

        let mut headers = Map::new();
        if allow != "*" {
            headers.insert("Vary".into(), Value::from("Origin"));
        }
        headers.insert("Access-Control-Allow-Origin".into(), Value::from(allow));
        headers.insert(
            "Access-Control-Allow-Methods".into(),
            Value::from(ALL_METHODS),
        );
        if let Some(requested) = requested_headers.filter(|h| !h.trim().is_empty()) {
            headers.insert(
                "Access-Control-Allow-Headers".into(),
                Value::from(requested),
            );
        }
        headers.insert(
            "Access-Control-Max-Age".into(),
            Value::from(self.max_age_secs.to_string()),
        );
        if self.allow_credentials {
            headers.insert(
                "Access-Control-Allow-Credentials".into(),
                Value::from("true"),
            );
        }
        Ok(headers)
    }
}
