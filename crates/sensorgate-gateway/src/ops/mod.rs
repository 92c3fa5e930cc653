//! Operational HTTP endpoints.
//!
//! - `/healthz`  : liveness
//! - `/metrics`  : Prometheus text format (or the reading log, per config)
//! - `/readings` : reading log as JSON

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::app_state::AppState;
use crate::config::ExpositionMode;

pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.cfg().exposition {
        ExpositionMode::Prometheus => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
            state.registry().collect(),
        )
            .into_response(),
        ExpositionMode::Readings => Json(state.readings().snapshot()).into_response(),
    }
}

pub async fn readings(State(state): State<AppState>) -> Response {
    Json(state.readings().snapshot()).into_response()
}
