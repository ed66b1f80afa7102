//! Time-series export backends

pub mod influxdb;

pub use influxdb::InfluxWriter;
