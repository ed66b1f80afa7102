//! Normalization of raw Somneo field codes into semantic sensor readings

use crate::client::RawReading;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One normalized sample of the Somneo environmental sensors.
///
/// Every semantic key is always carried; a field the device omitted or
/// nulled stays `None` rather than defaulting to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub light: Option<f64>,
    pub noise: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub avg_light: Option<f64>,
    pub avg_noise: Option<f64>,
}

impl SensorReading {
    /// Map the device's raw field codes onto the semantic keys.
    ///
    /// Unknown raw fields are ignored; non-numeric values count as absent.
    /// Never fails.
    pub fn from_raw(raw: &RawReading) -> Self {
        let field = |code: &str| raw.get(code).and_then(Value::as_f64);

        Self {
            temperature: field("mstmp"),
            humidity: field("msrhu"),
            light: field("mslux"),
            noise: field("mssnd"),
            avg_temperature: field("avtmp"),
            avg_humidity: field("avhum"),
            avg_light: field("avlux"),
            avg_noise: field("avsnd"),
        }
    }

    /// Present fields paired with their database field names
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("light", self.light),
            ("noise", self.noise),
            ("avg_temperature", self.avg_temperature),
            ("avg_humidity", self.avg_humidity),
            ("avg_light", self.avg_light),
            ("avg_noise", self.avg_noise),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    /// True when the device reported none of the eight fields
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }
}
