//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use sensorgate_core::error::{Result, SensorGateError};

pub use schema::{ActuatorSection, ExpositionMode, GatewayConfig, GatewaySection, ReadingsSection};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "SENSORGATE_CONFIG";
/// Env var overriding `actuator.base_url`.
pub const BASE_URL_ENV: &str = "COLOC_BASE_URL";
pub const DEFAULT_CONFIG_PATH: &str = "sensorgate.yaml";

/// Load config from the environment.
///
/// An explicitly named file must exist. Without one, `sensorgate.yaml` is
/// used when present and built-in defaults otherwise.
pub fn load() -> Result<GatewayConfig> {
    let mut cfg = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_from_file(&path)?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        Err(_) => {
            tracing::info!("no config file, using defaults");
            GatewayConfig::default()
        }
    };

    cfg.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SensorGateError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| SensorGateError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
