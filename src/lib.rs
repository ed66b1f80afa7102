//! Somneo sensor exporter
//!
//! Polls a Philips Somneo sleep tracker's local HTTPS status endpoint and
//! persists the environmental sensor block (temperature, humidity, light,
//! noise, and their rolling averages) into InfluxDB as timestamped, tagged
//! measurements.
//!
//! # Architecture
//!
//! - **client**: one-shot HTTPS fetch of the raw sensor block
//! - **sensors**: raw field-code to semantic-name normalization
//! - **export**: InfluxDB writer with idempotent database bootstrap
//! - **collector**: the fixed-interval poll loop and shutdown handling
//!
//! A transient device or database outage never terminates the exporter: a
//! failed cycle is logged and the next cycle retries after the regular poll
//! interval.

pub mod client;
pub mod collector;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod sensors;

pub use client::SomneoClient;
pub use collector::Collector;
pub use config::ExporterConfig;
pub use error::{ExporterError, Result};
pub use export::InfluxWriter;
pub use sensors::SensorReading;
