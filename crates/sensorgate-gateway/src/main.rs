//! sensorgate
//!
//! - POST /            : sensor reading -> gauge
//! - GET  /coloc-door* : forward door open to the actuator
//! - GET  /metrics     : Prometheus scrape

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sensorgate_core::error::{Result, SensorGateError};
use sensorgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "sensorgate stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "sensorgate starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SensorGateError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SensorGateError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
