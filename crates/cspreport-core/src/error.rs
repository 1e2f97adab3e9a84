//! Shared error type across cspreport crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed report body.
    BadRequest,
    /// Report body exceeded the configured limit.
    PayloadTooLarge,
    /// Configuration rejected at startup.
    InvalidConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CspReportError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum CspReportError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl CspReportError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CspReportError::BadRequest(_) => ClientCode::BadRequest,
            CspReportError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            CspReportError::InvalidConfig(_) => ClientCode::InvalidConfig,
            CspReportError::Internal(_) => ClientCode::Internal,
        }
    }
}
