//! Axum router wiring.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    actuator::Door,
    app_state::AppState,
    ops,
    transport::{door, ingest},
};

pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.cfg().gateway.request_timeout();

    let mut router = Router::new()
        .route("/", post(ingest::ingest).fallback(ingest::method_not_allowed))
        .route("/metrics", get(ops::metrics))
        .route("/readings", get(ops::readings))
        .route("/healthz", get(ops::healthz));

    for target in Door::ALL {
        router = router.route(
            target.route(),
            get(move |State(s): State<AppState>| door::open(s, target)),
        );
    }

    router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
