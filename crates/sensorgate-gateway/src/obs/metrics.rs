//! Minimal metrics registry.
//!
//! Counters and gauges are plain atomics behind typed handles, indexed by
//! name in a `DashMap`. Gauges store `f64` bits in an `AtomicU64` so `set`
//! stays lock-free. Rendering sorts by metric name to keep scrapes
//! deterministic.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use sensorgate_core::error::{Result, SensorGateError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

#[derive(Debug)]
struct MetricCell {
    name: String,
    help: String,
    kind: MetricKind,
    bits: AtomicU64,
}

impl MetricCell {
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, escape_help(&self.help));
        let _ = writeln!(out, "# TYPE {} {}", self.name, self.kind.as_str());
        let raw = self.bits.load(Ordering::Relaxed);
        match self.kind {
            MetricKind::Counter => {
                let _ = writeln!(out, "{} {}", self.name, raw);
            }
            MetricKind::Gauge => {
                let _ = writeln!(out, "{} {}", self.name, format_float(f64::from_bits(raw)));
            }
        }
    }
}

/// Settable point-in-time value.
#[derive(Debug, Clone)]
pub struct GaugeHandle(Arc<MetricCell>);

impl GaugeHandle {
    pub fn set(&self, v: f64) {
        self.0.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.bits.load(Ordering::Relaxed))
    }
}

/// Monotonic event count.
#[derive(Debug, Clone)]
pub struct CounterHandle(Arc<MetricCell>);

impl CounterHandle {
    /// Increment by 1.
    pub fn inc(&self) {
        self.0.bits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.bits.load(Ordering::Relaxed)
    }
}

/// Handle returned by [`Registry::register`].
#[derive(Debug, Clone)]
pub enum MetricHandle {
    Counter(CounterHandle),
    Gauge(GaugeHandle),
}

/// Process-wide metric registry. Build once at startup and share it.
#[derive(Debug, Default)]
pub struct Registry {
    cells: DashMap<String, Arc<MetricCell>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a metric. A name may be registered only once.
    pub fn register(&self, name: &str, kind: MetricKind, help: &str) -> Result<MetricHandle> {
        if !is_valid_name(name) {
            return Err(SensorGateError::InvalidMetric(name.to_string()));
        }

        let cell = match self.cells.entry(name.to_string()) {
            Entry::Occupied(_) => return Err(SensorGateError::DuplicateMetric(name.to_string())),
            Entry::Vacant(v) => {
                let cell = Arc::new(MetricCell {
                    name: name.to_string(),
                    help: help.to_string(),
                    kind,
                    bits: AtomicU64::new(initial_bits(kind)),
                });
                v.insert(Arc::clone(&cell));
                cell
            }
        };

        tracing::debug!(metric = %name, kind = kind.as_str(), "metric registered");
        Ok(match kind {
            MetricKind::Counter => MetricHandle::Counter(CounterHandle(cell)),
            MetricKind::Gauge => MetricHandle::Gauge(GaugeHandle(cell)),
        })
    }

    pub fn register_gauge(&self, name: &str, help: &str) -> Result<GaugeHandle> {
        match self.register(name, MetricKind::Gauge, help)? {
            MetricHandle::Gauge(g) => Ok(g),
            MetricHandle::Counter(_) => Err(SensorGateError::Internal(format!(
                "registry returned a counter for gauge {name}"
            ))),
        }
    }

    pub fn register_counter(&self, name: &str, help: &str) -> Result<CounterHandle> {
        match self.register(name, MetricKind::Counter, help)? {
            MetricHandle::Counter(c) => Ok(c),
            MetricHandle::Gauge(_) => Err(SensorGateError::Internal(format!(
                "registry returned a gauge for counter {name}"
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Render all metrics in Prometheus text exposition format.
    pub fn collect(&self) -> String {
        let mut cells: Vec<Arc<MetricCell>> =
            self.cells.iter().map(|r| Arc::clone(r.value())).collect();
        cells.sort_by(|a, b| a.name.cmp(&b.name));

        let mut out = String::new();
        for cell in &cells {
            cell.render(&mut out);
        }
        out
    }
}

fn initial_bits(kind: MetricKind) -> u64 {
    match kind {
        MetricKind::Counter => 0,
        MetricKind::Gauge => 0f64.to_bits(),
    }
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        v.to_string()
    }
}
