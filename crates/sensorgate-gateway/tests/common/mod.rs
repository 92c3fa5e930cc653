//! Shared helpers for router-level tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sensorgate_gateway::actuator::Actuator;
use sensorgate_gateway::app_state::AppState;
use sensorgate_gateway::config::GatewayConfig;
use sensorgate_gateway::router::build_router;

/// App with the default config and no actuator.
pub fn build_test_app() -> (Router, AppState) {
    build_test_app_with(GatewayConfig::default())
}

pub fn build_test_app_with(cfg: GatewayConfig) -> (Router, AppState) {
    let state = AppState::new(cfg).unwrap();
    (build_router(state.clone()), state)
}

pub fn build_test_app_with_actuator(actuator: Arc<dyn Actuator>) -> (Router, AppState) {
    let state = AppState::with_actuator(GatewayConfig::default(), actuator).unwrap();
    (build_router(state.clone()), state)
}

/// Send one request through the router and return status + body text.
pub async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::GET, uri, "").await
}

pub async fn post_reading(app: Router, body: &str) -> (StatusCode, String) {
    send(app, Method::POST, "/", body).await
}

/// Value of an unlabelled sample line in a Prometheus scrape.
pub fn sample(scrape: &str, name: &str) -> Option<String> {
    scrape
        .lines()
        .filter(|l| !l.starts_with('#'))
        .find_map(|l| {
            let (n, v) = l.split_once(' ')?;
            (n == name).then(|| v.to_string())
        })
}

/// A throwaway door controller on 127.0.0.1.
///
/// - `/open-stairs` answers 200 and counts hits
/// - `/open-garage` answers 500
/// - `/slow/open-stairs` sleeps for two seconds
pub struct ActuatorStub {
    pub base_url: String,
    pub stairs_hits: Arc<AtomicUsize>,
}

impl ActuatorStub {
    pub async fn spawn() -> Self {
        let stairs_hits = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&stairs_hits);

        let app = Router::new()
            .route(
                "/open-stairs",
                get(move || {
                    let hits = Arc::clone(&hits);
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "opened"
                    }
                }),
            )
            .route(
                "/open-garage",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "jammed") }),
            )
            .route(
                "/slow/open-stairs",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    "late"
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            stairs_hits,
        }
    }

    pub fn hits(&self) -> usize {
        self.stairs_hits.load(Ordering::SeqCst)
    }
}
