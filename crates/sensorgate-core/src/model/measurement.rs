use std::fmt;

use serde::{Deserialize, Serialize};

/// What a reading measures.
///
/// Sensors identify the quantity with a free-text name. Names outside the
/// known set are kept verbatim in `Unknown`, which callers must ignore rather
/// than reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Measurement {
    Temperature,
    Humidity,
    /// Wire name `realFeel`.
    FeelsLike,
    Unknown(String),
}

impl Measurement {
    pub const TEMPERATURE: &'static str = "temperature";
    pub const HUMIDITY: &'static str = "humidity";
    pub const FEELS_LIKE: &'static str = "realFeel";

    /// Classify a wire name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::TEMPERATURE => Measurement::Temperature,
            Self::HUMIDITY => Measurement::Humidity,
            Self::FEELS_LIKE => Measurement::FeelsLike,
            other => Measurement::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Measurement::Temperature => Self::TEMPERATURE,
            Measurement::Humidity => Self::HUMIDITY,
            Measurement::FeelsLike => Self::FEELS_LIKE,
            Measurement::Unknown(name) => name,
        }
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Measurement::Unknown(String::new())
    }
}

impl From<String> for Measurement {
    fn from(name: String) -> Self {
        match Measurement::from_name(&name) {
            Measurement::Unknown(_) => Measurement::Unknown(name),
            known => known,
        }
    }
}

impl From<Measurement> for String {
    fn from(m: Measurement) -> Self {
        match m {
            Measurement::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
