//! Error types for the Somneo exporter

use thiserror::Error;

/// Result type alias for exporter operations
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Error types for exporter operations
#[derive(Error, Debug)]
pub enum ExporterError {
    /// Device returned a non-success HTTP status
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// HTTP transport errors (connect, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// InfluxDB errors
    #[error("Database error: {0}")]
    Database(#[from] influxdb::Error),

    /// JSON parsing errors
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl ExporterError {
    /// Create a fetch error
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Check if the collector loop may swallow this error and retry on the
    /// next cycle. Configuration and I/O errors only occur before the loop
    /// starts and are fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ExporterError::Config(_) | ExporterError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let fetch_err = ExporterError::fetch("HTTP 500");
        assert!(fetch_err.is_recoverable());

        let config_err = ExporterError::config("missing database name");
        assert!(!config_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let error = ExporterError::fetch("HTTP 503: device busy");
        let error_string = format!("{error}");
        assert!(error_string.contains("Fetch error"));
        assert!(error_string.contains("device busy"));
    }
}
