//! Structural parsing of `data:` URIs.
//!
//! Only the prefix up to the first comma is interpreted. The payload is
//! handed back as a borrowed slice and never decoded.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::DataUriError;

// data:[<media-type>][;base64],<payload>
// The payload must be non-empty and single-line; one trailing newline is
// tolerated.
static DATA_URI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:([^;,]+)?(;base64)?,[^\n]+\n?$").expect("static regex compile")
});

/// A data URI split into its declared parts, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    media_type: Option<&'a str>,
    base64: bool,
    payload: &'a str,
}

impl<'a> DataUri<'a> {
    /// Parses `input` as `data:[<media-type>][;base64],<payload>`.
    ///
    /// # Errors
    ///
    /// Returns [`DataUriError::NotDataUri`] when the string does not have the
    /// data URI shape at all.
    pub fn parse(input: &'a str) -> Result<Self, DataUriError> {
        let caps = DATA_URI_RE
            .captures(input)
            .ok_or(DataUriError::NotDataUri)?;

        let media_type = caps.get(1).map(|m| m.as_str()).filter(|s| !s.is_empty());
        let base64 = caps.get(2).is_some();
        // The prefix groups cannot contain a comma, so the first comma after
        // them is where the payload starts.
        let prefix_end = caps
            .get(2)
            .or_else(|| caps.get(1))
            .map_or("data:".len(), |m| m.end());
        let payload = &input[prefix_end + 1..];

        Ok(Self {
            media_type,
            base64,
            payload,
        })
    }

    #[must_use]
    pub fn media_type(&self) -> Option<&'a str> {
        self.media_type
    }

    /// Returns the media type, or an error when none was declared.
    ///
    /// # Errors
    ///
    /// Returns [`DataUriError::MissingMediaType`] for URIs like `data:,x`.
    pub fn require_media_type(&self) -> Result<&'a str, DataUriError> {
        self.media_type.ok_or(DataUriError::MissingMediaType)
    }

    /// Whether the `;base64` marker was present. Classification ignores it.
    #[must_use]
    pub fn is_base64(&self) -> bool {
        self.base64
    }

    #[must_use]
    pub fn payload(&self) -> &'a str {
        self.payload
    }
}
