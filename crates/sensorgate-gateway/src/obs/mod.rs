//! Lightweight in-process metrics.
//!
//! `metrics` is the generic registry and text exposition; `sensors` is the
//! fixed set of gauges and door counters this gateway publishes. Metrics are
//! stored as atomics and rendered by the `/metrics` handler.

pub mod metrics;
pub mod sensors;

pub use metrics::{CounterHandle, GaugeHandle, MetricHandle, MetricKind, Registry};
pub use sensors::SensorMetrics;
