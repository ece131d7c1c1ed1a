use std::env;

use crate::api::cors::{AllowOrigins, CorsPolicy};
use crate::errors::ConfigError;

pub const DEFAULT_SERVICE_NAME: &str = "MIME Type Detector API";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub service_name: String,
    pub cors: CorsPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            cors: CorsPolicy::permissive(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a CORS variable is set to something unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_name = lookup("SERVICE_NAME")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        let mut cors = CorsPolicy::permissive();

        if let Some(raw) = lookup("CORS_ALLOW_ORIGINS") {
            cors.allow_origins = parse_origins(&raw)?;
        }

        if let Some(raw) = lookup("CORS_ALLOW_CREDENTIALS") {
            cors.allow_credentials = parse_bool("CORS_ALLOW_CREDENTIALS", &raw)?;
        }

        Ok(Self { service_name, cors })
    }
}

fn parse_origins(raw: &str) -> Result<AllowOrigins, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();

    if origins.is_empty() {
        return Err(ConfigError::InvalidValue {
            name: "CORS_ALLOW_ORIGINS",
            value: raw.to_string(),
        });
    }

    if origins.iter().any(|o| o == "*") {
        Ok(AllowOrigins::Any)
    } else {
        Ok(AllowOrigins::List(origins))
    }
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        }),
    }
}
