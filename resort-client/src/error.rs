//! Client error types

use shared::error::{AppError, ErrorCategory, ErrorCode};
use thiserror::Error;

/// Structured error body some backend routes return on non-2xx
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// `{ success: false, error }` body, the common failure shape
#[derive(Debug, serde::Deserialize)]
pub(crate) struct EnvelopeError {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with an error payload (`success: false` or a coded error)
    #[error("API error {code}: {message}")]
    Api {
        code: i32,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Authentication required or token rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error reported by the backend
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend state conflicts with the request (e.g. room already checked in)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Operation not allowed in the current client state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rejected locally before any request was sent
    #[error("Rejected: {0}")]
    Rejected(#[from] AppError),
}

impl ClientError {
    /// Error code of a local rejection
    pub fn rejection_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Rejected(e) => Some(e.code),
            _ => None,
        }
    }

    /// Classify this error on the shared code table
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Api { code, .. } => u16::try_from(*code)
                .ok()
                .and_then(|c| ErrorCode::try_from(c).ok())
                .unwrap_or(ErrorCode::Unknown),
            Self::Unauthorized(_) => ErrorCode::NotAuthenticated,
            Self::Forbidden(_) => ErrorCode::PermissionDenied,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Conflict(_) => ErrorCode::AlreadyExists,
            Self::Internal(_) => ErrorCode::InternalError,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            Self::InvalidState(_) => ErrorCode::InvalidRequest,
            Self::Rejected(e) => e.code,
        }
    }

    /// Category of the error; backend codes outside the local table keep their range
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api { code, .. } => u16::try_from(*code)
                .map(ErrorCategory::from_code)
                .unwrap_or(ErrorCategory::System),
            other => other.code().category(),
        }
    }

    /// Map a non-success HTTP status and its body to an error
    pub(crate) fn from_status(status: http::StatusCode, text: String) -> Self {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
            return Self::Api {
                code: api_err.code,
                message: api_err.message,
                details: api_err.details,
            };
        }
        let text = serde_json::from_str::<EnvelopeError>(&text)
            .ok()
            .and_then(|e| e.error.or(e.message))
            .unwrap_or(text);

        match ErrorCode::from_http_status(status) {
            ErrorCode::NotAuthenticated => Self::Unauthorized(text),
            ErrorCode::PermissionDenied => Self::Forbidden(text),
            ErrorCode::NotFound => Self::NotFound(text),
            ErrorCode::ValidationFailed => Self::Validation(text),
            ErrorCode::AlreadyExists => Self::Conflict(text),
            _ => Self::Internal(text),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
