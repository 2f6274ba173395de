//! Shared error type across humisense crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// The sensor could not produce a sample right now.
    SensorUnavailable,
    /// The sensor answered with bytes that do not form a valid frame.
    MalformedPayload,
    /// The listen socket could not be bound.
    BindFailed,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::SensorUnavailable => "SENSOR_UNAVAILABLE",
            ClientCode::MalformedPayload => "MALFORMED_PAYLOAD",
            ClientCode::BindFailed => "BIND_FAILED",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status code the backend answers with.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest => 400,
            ClientCode::SensorUnavailable => 503,
            ClientCode::MalformedPayload => 502,
            ClientCode::BindFailed | ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SensorError>;

/// Unified error type used by core and backend.
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("sensor unavailable: {0}")]
    SensorUnavailable(String),
    #[error("malformed sensor payload: {0}")]
    MalformedPayload(String),
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SensorError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SensorError::BadRequest(_) => ClientCode::BadRequest,
            SensorError::SensorUnavailable(_) => ClientCode::SensorUnavailable,
            SensorError::MalformedPayload(_) => ClientCode::MalformedPayload,
            SensorError::Bind(_) => ClientCode::BindFailed,
            SensorError::Internal(_) => ClientCode::Internal,
        }
    }
}
