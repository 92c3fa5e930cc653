//! Shared error type across sensorgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed message.
    BadRequest,
    /// HTTP method not supported on the route.
    MethodNotAllowed,
    /// A dependency (actuator) is not configured.
    Unavailable,
    /// Downstream answered with an error or the call failed in transport.
    BadGateway,
    /// Downstream did not answer within the configured timeout.
    GatewayTimeout,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::Unavailable => "UNAVAILABLE",
            ClientCode::BadGateway => "BAD_GATEWAY",
            ClientCode::GatewayTimeout => "GATEWAY_TIMEOUT",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status for the code.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest => 400,
            ClientCode::MethodNotAllowed => 405,
            ClientCode::Unavailable => 503,
            ClientCode::BadGateway => 502,
            ClientCode::GatewayTimeout => 504,
            ClientCode::UnsupportedVersion | ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SensorGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum SensorGateError {
    #[error("{0}")]
    BadRequest(String),
    #[error("invalid value {value:?}: {reason}")]
    InvalidValue { value: String, reason: String },
    #[error("Only POST method is supported")]
    MethodNotAllowed,
    #[error("actuator not configured")]
    ActuatorUnavailable,
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("upstream timed out")]
    UpstreamTimeout,
    #[error("metric already registered: {0}")]
    DuplicateMetric(String),
    #[error("invalid metric name: {0}")]
    InvalidMetric(String),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SensorGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SensorGateError::BadRequest(_) | SensorGateError::InvalidValue { .. } => {
                ClientCode::BadRequest
            }
            SensorGateError::MethodNotAllowed => ClientCode::MethodNotAllowed,
            SensorGateError::ActuatorUnavailable => ClientCode::Unavailable,
            SensorGateError::Upstream(_) => ClientCode::BadGateway,
            SensorGateError::UpstreamTimeout => ClientCode::GatewayTimeout,
            SensorGateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SensorGateError::DuplicateMetric(_)
            | SensorGateError::InvalidMetric(_)
            | SensorGateError::Config(_)
            | SensorGateError::Internal(_) => ClientCode::Internal,
        }
    }
}
