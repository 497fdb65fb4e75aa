//! Error types for the catalog REST client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when using the catalog client
#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with a failure code inside the envelope.
    #[error("API error {code}: {message} (request_id={request_id}, http_status={http_status})")]
    Api {
        code: String,
        message: String,
        request_id: String,
        http_status: StatusCode,
    },

    /// Non-2xx status, or a body that is not a JSON envelope.
    #[error("HTTP error {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("baseURL is required")]
    BaseUrlRequired,

    #[error("apiKey is required")]
    ApiKeyRequired,

    #[error("baseURL must include scheme and host: {0}")]
    InvalidBaseUrl(String),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("{0}")]
    NilRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the service itself rejected the request.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Service error code, for business errors.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// HTTP status attached to the error, if any.
    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { http_status, .. } => Some(*http_status),
            Error::Http { status, .. } => Some(*status),
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Error::Validation(moi_api_contract::validation::first_message(&errors))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;
