use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use bytes::Bytes;
use chrono::Utc;

use sensorgate_core::error::SensorGateError;
use sensorgate_core::ReadingPayload;

use crate::app_state::AppState;
use crate::error::ApiError;

pub const ACK: &str = "Data received successfully";

/// `POST /`: decode one reading and route its value to the matching gauge.
///
/// Unknown measurements are accepted and ignored. Bad JSON or a value that
/// is not a number is a 400; metrics are left untouched in both cases.
pub async fn ingest(State(state): State<AppState>, body: Bytes) -> Result<&'static str, ApiError> {
    let payload = ReadingPayload::decode(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejecting reading");
        SensorGateError::BadRequest("Invalid JSON".into())
    })?;

    let value = payload.parse_value().map_err(|e| {
        tracing::warn!(error = %e, measurement = %payload.measurement, host = %payload.host, "rejecting reading");
        e
    })?;

    if !state.sensors().record(&payload.measurement, value) {
        tracing::debug!(measurement = %payload.measurement, "ignoring unknown measurement");
    }

    let reading = payload.into_reading(Utc::now());
    tracing::info!(
        measurement = %reading.measurement,
        host = %reading.host,
        value = %reading.value,
        type_value = %reading.type_value,
        created_at = %reading.created_at,
        "received reading"
    );
    state.readings().push(reading);

    Ok(ACK)
}

/// Any non-POST method on `/`.
pub async fn method_not_allowed() -> impl IntoResponse {
    ([(header::ALLOW, "POST")], ApiError(SensorGateError::MethodNotAllowed))
}
