//! Device client for the Somneo local HTTPS API

pub mod http_client;

pub use http_client::SomneoClient;

use serde_json::{Map, Value};

/// Parsed JSON body of the device status endpoint, keyed by raw field code
pub type RawReading = Map<String, Value>;

/// Status endpoint serving the environmental sensor block
pub const SENSOR_ENDPOINT: &str = "/di/v1/products/1/wusrd";
