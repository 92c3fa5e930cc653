//! The metric set published by the gateway.
//!
//! Names are kept stable for existing dashboards, including the mixed-case
//! `dht22_feelsLike_celsius`.

use sensorgate_core::error::Result;
use sensorgate_core::Measurement;

use crate::actuator::Door;
use crate::obs::metrics::{CounterHandle, GaugeHandle, Registry};

pub const TEMPERATURE: &str = "dht22_temperature_celsius";
pub const HUMIDITY: &str = "dht22_humidity_percent";
pub const FEELS_LIKE: &str = "dht22_feelsLike_celsius";

#[derive(Debug, Clone)]
pub struct SensorMetrics {
    pub temperature: GaugeHandle,
    pub humidity: GaugeHandle,
    pub feels_like: GaugeHandle,
    stairs_opened: CounterHandle,
    garage_opened: CounterHandle,
}

impl SensorMetrics {
    /// Register every gauge and door counter. Fails if any name is taken.
    pub fn register(reg: &Registry) -> Result<Self> {
        Ok(Self {
            temperature: reg.register_gauge(TEMPERATURE, "Temperature from DHT22 sensor in Celsius.")?,
            humidity: reg.register_gauge(HUMIDITY, "Humidity from DHT22 sensor in percentage.")?,
            feels_like: reg.register_gauge(FEELS_LIKE, "Feels Like from DHT22 sensor in Celsius.")?,
            stairs_opened: reg.register_counter(
                Door::Stairs.counter_name(),
                Door::Stairs.counter_help(),
            )?,
            garage_opened: reg.register_counter(
                Door::Garage.counter_name(),
                Door::Garage.counter_help(),
            )?,
        })
    }

    pub fn gauge_for(&self, measurement: &Measurement) -> Option<&GaugeHandle> {
        match measurement {
            Measurement::Temperature => Some(&self.temperature),
            Measurement::Humidity => Some(&self.humidity),
            Measurement::FeelsLike => Some(&self.feels_like),
            Measurement::Unknown(_) => None,
        }
    }

    /// Set the gauge for `measurement`. Returns false (and changes nothing)
    /// for unknown measurements.
    pub fn record(&self, measurement: &Measurement, value: f64) -> bool {
        match self.gauge_for(measurement) {
            Some(gauge) => {
                gauge.set(value);
                true
            }
            None => false,
        }
    }

    pub fn door_counter(&self, door: Door) -> &CounterHandle {
        match door {
            Door::Stairs => &self.stairs_opened,
            Door::Garage => &self.garage_opened,
        }
    }
}
