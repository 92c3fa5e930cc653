//! Door actuator forwarding.
//!
//! A `Door` names one physical door and the actuator action that opens it.
//! `Actuator` is the outbound seam: the HTTP implementation talks to the
//! door controller, `Unconfigured` answers when no base URL is set.

pub mod http;

use async_trait::async_trait;

use sensorgate_core::error::{Result, SensorGateError};

pub use http::HttpActuator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Door {
    Stairs,
    Garage,
}

impl Door {
    pub const ALL: [Door; 2] = [Door::Stairs, Door::Garage];

    pub fn as_str(self) -> &'static str {
        match self {
            Door::Stairs => "stairs",
            Door::Garage => "garage",
        }
    }

    /// Inbound route that triggers the door.
    pub fn route(self) -> &'static str {
        match self {
            Door::Stairs => "/coloc-door",
            Door::Garage => "/coloc-door-garage",
        }
    }

    /// Path segment appended to the actuator base URL.
    pub fn action(self) -> &'static str {
        match self {
            Door::Stairs => "open-stairs",
            Door::Garage => "open-garage",
        }
    }

    pub fn counter_name(self) -> &'static str {
        match self {
            Door::Stairs => "coloc_stairs_counter",
            Door::Garage => "coloc_garage_counter",
        }
    }

    pub fn counter_help(self) -> &'static str {
        match self {
            Door::Stairs => "Number of times the stairs door has been opened",
            Door::Garage => "Number of times the garage door has been opened",
        }
    }

    pub fn opened_message(self) -> &'static str {
        match self {
            Door::Stairs => "Stairs open successfully",
            Door::Garage => "Garage open successfully",
        }
    }
}

/// Outbound door controller. One attempt per call, no retry.
#[async_trait]
pub trait Actuator: Send + Sync {
    async fn open(&self, door: Door) -> Result<()>;
}

/// Stand-in used when no actuator base URL is configured.
#[derive(Debug, Default)]
pub struct Unconfigured;

#[async_trait]
impl Actuator for Unconfigured {
    async fn open(&self, _door: Door) -> Result<()> {
        Err(SensorGateError::ActuatorUnavailable)
    }
}
