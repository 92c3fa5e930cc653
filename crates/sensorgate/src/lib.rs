//! Top-level facade crate for sensorgate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use sensorgate_core::*;
}

pub mod gateway {
    pub use sensorgate_gateway::*;
}
