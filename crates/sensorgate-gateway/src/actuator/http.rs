//! HTTP door controller client.

use std::time::Duration;

use async_trait::async_trait;

use sensorgate_core::error::{Result, SensorGateError};

use super::{Actuator, Door};

/// Issues `GET <base_url>/<action>` with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpActuator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpActuator {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SensorGateError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, door: Door) -> String {
        format!("{}/{}", self.base_url, door.action())
    }
}

#[async_trait]
impl Actuator for HttpActuator {
    async fn open(&self, door: Door) -> Result<()> {
        let url = self.url_for(door);
        let resp = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SensorGateError::UpstreamTimeout
            } else {
                SensorGateError::Upstream(format!("GET {url} failed: {e}"))
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SensorGateError::Upstream(format!(
                "GET {url} returned HTTP {}",
                status.as_u16()
            )));
        }
        Ok(())
    }
}
