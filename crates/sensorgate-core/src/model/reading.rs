use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SensorGateError};
use crate::model::Measurement;

/// Inbound sensor body.
///
/// `value` is required and travels as a JSON string; the other fields default
/// to empty. Unknown fields (including a client-sent `createdAt`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingPayload {
    #[serde(default)]
    pub measurement: Measurement,
    #[serde(default)]
    pub host: String,
    pub value: String,
    /// Free text, carried but never interpreted.
    #[serde(default, rename = "typeValue")]
    pub type_value: String,
}

impl ReadingPayload {
    /// Decode a request body. Content-Type is not consulted.
    pub fn decode(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| SensorGateError::BadRequest(format!("invalid json: {e}")))
    }

    /// Parse `value` as a decimal floating-point number.
    ///
    /// Literals too large for `f64` (`1e400`) are rejected; infinity and NaN
    /// are accepted only when spelled out.
    pub fn parse_value(&self) -> Result<f64> {
        let v = self
            .value
            .parse::<f64>()
            .map_err(|e| SensorGateError::InvalidValue {
                value: self.value.clone(),
                reason: e.to_string(),
            })?;

        if !v.is_finite() && !is_non_finite_literal(&self.value) {
            return Err(SensorGateError::InvalidValue {
                value: self.value.clone(),
                reason: "value out of range".into(),
            });
        }
        Ok(v)
    }

    /// Stamp the payload with its arrival time.
    pub fn into_reading(self, created_at: DateTime<Utc>) -> Reading {
        Reading {
            measurement: self.measurement,
            host: self.host,
            value: self.value,
            type_value: self.type_value,
            created_at,
        }
    }
}

/// A received reading, as kept in the reading log and rendered as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub measurement: Measurement,
    pub host: String,
    pub value: String,
    pub type_value: String,
    pub created_at: DateTime<Utc>,
}

fn is_non_finite_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|lit| unsigned.eq_ignore_ascii_case(lit))
}
