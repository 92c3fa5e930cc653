//! HTTP handlers for sensor traffic.
//!
//! - `ingest`: `POST /` sensor readings -> gauges
//! - `door`: `GET /coloc-door*` -> actuator forward + counter

pub mod door;
pub mod ingest;
