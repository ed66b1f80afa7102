//! Configuration management for the Somneo exporter

use crate::error::{ExporterError, Result};
use serde::{Deserialize, Serialize};
use std::{env, time::Duration};
use url::Url;

/// Default device host on the local network
pub const DEFAULT_SOMNEO_HOST: &str = "192.168.1.1";

/// Default device port (HTTPS)
pub const DEFAULT_SOMNEO_PORT: u16 = 443;

const DEFAULT_INFLUXDB_HOST: &str = "influxdb";
const DEFAULT_INFLUXDB_PORT: u16 = 8086;
const DEFAULT_INFLUXDB_DATABASE: &str = "sensors";
const DEFAULT_INFLUXDB_USER: &str = "somneo";
const DEFAULT_INFLUXDB_PASSWORD: &str = "somneopassword";
const DEFAULT_LOCATION: &str = "bedroom";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 1800;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Exporter configuration, read once at startup and immutable afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Somneo device configuration
    pub somneo: SomneoConfig,

    /// InfluxDB configuration
    pub influxdb: InfluxConfig,

    /// Location tag attached to every data point
    pub location: String,

    /// Wait between collection cycles; doubles as the retry delay
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
}

/// Somneo device configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SomneoConfig {
    /// Device base URL (e.g. "https://192.168.1.1")
    pub url: Url,

    /// Fetch timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    /// Enable TLS certificate verification. The Somneo presents a
    /// self-signed certificate, so this stays off by default.
    pub verify_ssl: bool,
}

/// InfluxDB configuration (1.x API: named database plus basic credentials)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluxConfig {
    /// InfluxDB base URL (e.g. "http://influxdb:8086")
    pub url: Url,

    /// Target database, created on demand if missing
    pub database: String,

    /// Username for basic authentication
    pub username: Option<String>,

    /// Password for basic authentication
    pub password: Option<String>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            somneo: SomneoConfig::default(),
            influxdb: InfluxConfig::default(),
            location: DEFAULT_LOCATION.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

impl Default for SomneoConfig {
    fn default() -> Self {
        Self {
            url: device_url(DEFAULT_SOMNEO_HOST, DEFAULT_SOMNEO_PORT).unwrap(),
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            verify_ssl: false,
        }
    }
}

impl Default for InfluxConfig {
    fn default() -> Self {
        Self {
            url: influx_url(DEFAULT_INFLUXDB_HOST, DEFAULT_INFLUXDB_PORT).unwrap(),
            database: DEFAULT_INFLUXDB_DATABASE.to_string(),
            username: Some(DEFAULT_INFLUXDB_USER.to_string()),
            password: Some(DEFAULT_INFLUXDB_PASSWORD.to_string()),
        }
    }
}

impl ExporterConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        let somneo_host =
            env::var("SOMNEO_HOST").unwrap_or_else(|_| DEFAULT_SOMNEO_HOST.to_string());
        let somneo_port = match env::var("SOMNEO_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|e| ExporterError::config(format!("Invalid SOMNEO_PORT: {e}")))?,
            Err(_) => DEFAULT_SOMNEO_PORT,
        };
        config.somneo.url = device_url(&somneo_host, somneo_port)?;

        if let Ok(timeout) = env::var("SOMNEO_TIMEOUT") {
            config.somneo.timeout = Duration::from_secs(
                timeout
                    .parse()
                    .map_err(|e| ExporterError::config(format!("Invalid SOMNEO_TIMEOUT: {e}")))?,
            );
        }

        let influx_host =
            env::var("INFLUXDB_HOST").unwrap_or_else(|_| DEFAULT_INFLUXDB_HOST.to_string());
        let influx_port = match env::var("INFLUXDB_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|e| ExporterError::config(format!("Invalid INFLUXDB_PORT: {e}")))?,
            Err(_) => DEFAULT_INFLUXDB_PORT,
        };
        config.influxdb.url = influx_url(&influx_host, influx_port)?;

        if let Ok(database) = env::var("INFLUXDB_DATABASE") {
            config.influxdb.database = database;
        }

        if let Ok(username) = env::var("INFLUXDB_USER") {
            config.influxdb.username = Some(username);
        }

        if let Ok(password) = env::var("INFLUXDB_PASSWORD") {
            config.influxdb.password = Some(password);
        }

        if let Ok(location) = env::var("SOMNEO_LOCATION") {
            config.location = location;
        }

        if let Ok(interval) = env::var("POLL_INTERVAL") {
            config.poll_interval = Duration::from_secs(
                interval
                    .parse()
                    .map_err(|e| ExporterError::config(format!("Invalid POLL_INTERVAL: {e}")))?,
            );
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.somneo.url.scheme() != "http" && self.somneo.url.scheme() != "https" {
            return Err(ExporterError::config(
                "Device URL must use http or https scheme",
            ));
        }

        if self.influxdb.database.is_empty() {
            return Err(ExporterError::config("Database name cannot be empty"));
        }

        if self.location.is_empty() {
            return Err(ExporterError::config("Location tag cannot be empty"));
        }

        if self.poll_interval.is_zero() {
            return Err(ExporterError::config(
                "Poll interval must be greater than zero",
            ));
        }

        if self.somneo.timeout.is_zero() {
            return Err(ExporterError::config(
                "Fetch timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}

/// Build the device base URL from host and port
pub fn device_url(host: &str, port: u16) -> Result<Url> {
    format!("https://{host}:{port}")
        .parse()
        .map_err(|e| ExporterError::config(format!("Invalid device address {host}:{port}: {e}")))
}

/// Build the InfluxDB base URL from host and port
pub fn influx_url(host: &str, port: u16) -> Result<Url> {
    format!("http://{host}:{port}")
        .parse()
        .map_err(|e| ExporterError::config(format!("Invalid InfluxDB address {host}:{port}: {e}")))
}
