//! HTTP mapping for `SensorGateError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use sensorgate_core::error::SensorGateError;

/// Handler error: wraps the shared error so it can become a response.
#[derive(Debug)]
pub struct ApiError(pub SensorGateError);

impl From<SensorGateError> for ApiError {
    fn from(e: SensorGateError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.client_code().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.0.to_string()).into_response()
    }
}
