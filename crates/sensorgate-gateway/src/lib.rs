//! sensorgate gateway library entry.
//!
//! Wires config, the metric registry, reading ingestion and the door
//! actuator forward into one axum service. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod actuator;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod readings;
pub mod router;
pub mod transport;
