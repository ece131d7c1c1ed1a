//! MIME category classification for data URIs

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::data_uri::DataUri;
use crate::errors::DataUriError;

/// Coarse category derived from a declared media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeCategory {
    Image,
    Text,
    Application,
    Unknown,
}

impl MimeCategory {
    /// Maps a media type to its category by exact, case-sensitive prefix.
    ///
    /// The slash is part of the prefix, so a bare `image` is `Unknown`.
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Self {
        if media_type.starts_with("image/") {
            MimeCategory::Image
        } else if media_type.starts_with("text/") {
            MimeCategory::Text
        } else if media_type.starts_with("application/") {
            MimeCategory::Application
        } else {
            MimeCategory::Unknown
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MimeCategory::Image => "image",
            MimeCategory::Text => "text",
            MimeCategory::Application => "application",
            MimeCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a data URI by its declared media type.
///
/// Never fails: anything that cannot be parsed, or that declares no media
/// type, is [`MimeCategory::Unknown`].
#[must_use]
pub fn classify(data_uri: &str) -> MimeCategory {
    match try_classify(data_uri) {
        Ok(category) => category,
        Err(e) => {
            debug!(reason = %e, "Data URI classified as unknown");
            MimeCategory::Unknown
        }
    }
}

fn try_classify(data_uri: &str) -> Result<MimeCategory, DataUriError> {
    let parsed = DataUri::parse(data_uri)?;
    let media_type = parsed.require_media_type()?;
    Ok(MimeCategory::from_media_type(media_type))
}
