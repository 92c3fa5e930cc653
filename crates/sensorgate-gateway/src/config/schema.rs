use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use sensorgate_core::error::{Result, SensorGateError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub actuator: ActuatorSection,

    #[serde(default)]
    pub readings: ReadingsSection,

    #[serde(default)]
    pub exposition: ExpositionMode,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            actuator: ActuatorSection::default(),
            readings: ReadingsSection::default(),
            exposition: ExpositionMode::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SensorGateError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.actuator.validate()?;
        self.readings.validate()?;

        // actuator must time out first so a stalled controller answers 504
        if self.actuator.timeout_ms >= self.gateway.request_timeout_ms {
            return Err(SensorGateError::Config(
                "actuator.timeout_ms must be less than gateway.request_timeout_ms".into(),
            ));
        }

        Ok(())
    }

    /// Replace `actuator.base_url` with a non-empty override (from the
    /// environment).
    pub fn apply_base_url_override(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.actuator.base_url = Some(url.trim().to_string());
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1000..=120000).contains(&self.request_timeout_ms) {
            return Err(SensorGateError::Config(
                "gateway.request_timeout_ms must be between 1000 and 120000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            SensorGateError::Config(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActuatorSection {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_actuator_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ActuatorSection {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: default_actuator_timeout_ms(),
        }
    }
}

impl ActuatorSection {
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SensorGateError::Config(format!(
                    "actuator.base_url must start with http:// or https:// (got {url:?})"
                )));
            }
        }
        if !(100..=60000).contains(&self.timeout_ms) {
            return Err(SensorGateError::Config(
                "actuator.timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadingsSection {
    /// Most recent readings kept in memory. 0 disables the log.
    #[serde(default = "default_readings_capacity")]
    pub capacity: usize,
}

impl Default for ReadingsSection {
    fn default() -> Self {
        Self {
            capacity: default_readings_capacity(),
        }
    }
}

impl ReadingsSection {
    pub fn validate(&self) -> Result<()> {
        if self.capacity > 1_000_000 {
            return Err(SensorGateError::Config(
                "readings.capacity must be at most 1000000".into(),
            ));
        }
        Ok(())
    }
}

/// What `GET /metrics` serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpositionMode {
    /// Prometheus text format.
    #[default]
    Prometheus,
    /// JSON array of the reading log.
    Readings,
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_request_timeout_ms() -> u64 {
    10000
}
fn default_actuator_timeout_ms() -> u64 {
    5000
}
fn default_readings_capacity() -> usize {
    1024
}
