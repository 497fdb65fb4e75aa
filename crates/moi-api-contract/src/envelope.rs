//! The response wrapper every catalog endpoint returns

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response envelope.
///
/// On success `code` is empty or `"OK"` and `data` carries the payload. On a
/// business failure `code` and `msg` describe the error reported by the
/// service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub request_id: Option<String>,
}

impl ApiEnvelope {
    /// Code the service uses for successful responses.
    pub const OK: &'static str = "OK";

    /// Whether the envelope reports success.
    pub fn is_success(&self) -> bool {
        match self.code.as_deref() {
            None | Some("") => true,
            Some(code) => code == Self::OK,
        }
    }

    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.msg.as_deref().unwrap_or_default()
    }

    pub fn request_id(&self) -> &str {
        self.request_id.as_deref().unwrap_or_default()
    }

    /// Consume the envelope and return its payload.
    pub fn into_data(self) -> Value {
        self.data
    }
}
