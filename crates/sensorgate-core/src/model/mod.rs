//! Sensor reading model.
//!
//! - `ReadingPayload`: the JSON body a sensor posts (value still as text).
//! - `Reading`: a payload stamped with its server-side arrival time.
//! - `Measurement`: classification of the `measurement` field.
//!
//! Decoding never panics: malformed bodies and unparseable values are
//! reported as `SensorGateError` so the caller can answer 400 and carry on.

pub mod measurement;
pub mod reading;

pub use measurement::Measurement;
pub use reading::{Reading, ReadingPayload};
