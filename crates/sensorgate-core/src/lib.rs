//! sensorgate core: transport-agnostic reading model and error types.
//!
//! This crate defines the inbound reading shape, measurement classification,
//! and the error surface shared by the gateway and tooling. It intentionally
//! carries no transport or runtime dependencies so it can be reused in
//! multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SensorGateError`/`Result` so a bad
//! sensor payload never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{Result, SensorGateError};
pub use model::{Measurement, Reading, ReadingPayload};
