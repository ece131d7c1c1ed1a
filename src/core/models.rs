use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::mime::MimeCategory;

/// Body of `POST /file`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentRequest {
    pub attachments: HashMap<String, String>,
}

impl AttachmentRequest {
    /// The data URI to classify, if the caller supplied one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.attachments.get("url").map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeTypeResponse {
    #[serde(rename = "type")]
    pub category: MimeCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    #[must_use]
    pub fn healthy(service: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.to_string(),
        }
    }
}
