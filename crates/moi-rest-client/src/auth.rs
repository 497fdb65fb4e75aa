//! API key authentication for the catalog client

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;

use crate::error::{Error, Result};

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "moi-key";

/// API key credentials (`moi-key: <key>`)
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("api_key", &"<redacted>").finish()
    }
}

impl Credentials {
    /// Create credentials from an API key; surrounding whitespace is dropped.
    pub fn api_key(api_key: impl AsRef<str>) -> Result<Self> {
        let trimmed = api_key.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::ApiKeyRequired);
        }
        Ok(Self {
            api_key: trimmed.to_string(),
        })
    }

    /// Apply authentication headers to a request
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) -> Result<()> {
        let mut value =
            HeaderValue::from_str(&self.api_key).map_err(|e| Error::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        Ok(())
    }

    /// Get headers for these credentials
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        self.apply_to_headers(&mut headers)?;
        Ok(headers)
    }
}
