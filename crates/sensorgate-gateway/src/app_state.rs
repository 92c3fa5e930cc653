//! Shared application state for the sensorgate service.
//!
//! Everything mutable lives here and is handed to handlers through axum
//! state: the metric registry, the sensor metric set, the reading log and the
//! door actuator. Construction returns `Result` so startup problems (a metric
//! registered twice, a bad actuator URL) stop the process before it serves.

use std::sync::Arc;

use sensorgate_core::error::Result;

use crate::actuator::{Actuator, HttpActuator, Unconfigured};
use crate::config::GatewayConfig;
use crate::obs::{Registry, SensorMetrics};
use crate::readings::ReadingLog;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    actuator: Arc<dyn Actuator>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    registry: Registry,
    sensors: SensorMetrics,
    readings: ReadingLog,
}

impl AppState {
    /// Build state with the actuator described by `cfg.actuator`.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let actuator: Arc<dyn Actuator> = match &cfg.actuator.base_url {
            Some(url) => {
                tracing::info!(base_url = %url, "door actuator configured");
                Arc::new(HttpActuator::new(url, cfg.actuator.timeout())?)
            }
            None => {
                tracing::warn!("no actuator base url; door endpoints will answer 503");
                Arc::new(Unconfigured)
            }
        };
        Self::with_actuator(cfg, actuator)
    }

    /// Build state around a caller-supplied actuator.
    pub fn with_actuator(cfg: GatewayConfig, actuator: Arc<dyn Actuator>) -> Result<Self> {
        let registry = Registry::new();
        let sensors = SensorMetrics::register(&registry)?;
        let readings = ReadingLog::new(cfg.readings.capacity);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                sensors,
                readings,
            }),
            actuator,
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn sensors(&self) -> &SensorMetrics {
        &self.inner.sensors
    }

    pub fn readings(&self) -> &ReadingLog {
        &self.inner.readings
    }

    pub fn actuator(&self) -> Arc<dyn Actuator> {
        Arc::clone(&self.actuator)
    }
}
