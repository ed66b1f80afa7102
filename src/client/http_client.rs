//! HTTP client implementation for Somneo device communication
//!
//! One HTTPS GET against the device's local status endpoint. The Somneo
//! ships with a self-signed certificate, so certificate verification is
//! normally disabled.

use crate::client::{RawReading, SENSOR_ENDPOINT};
use crate::config::SomneoConfig;
use crate::error::{ExporterError, Result};
use reqwest::{Client, ClientBuilder};
use tracing::{debug, warn};
use url::Url;

/// HTTP client for the Somneo device
pub struct SomneoClient {
    /// HTTP client instance
    client: Client,

    /// Base URL for the device
    base_url: Url,
}

impl SomneoClient {
    /// Create a new device client
    pub fn new(config: &SomneoConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(format!("somneo-exporter/{}", env!("CARGO_PKG_VERSION")));

        if !config.verify_ssl {
            warn!("SSL verification disabled - the Somneo presents a self-signed certificate");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build()?;

        Ok(Self {
            client,
            base_url: config.url.clone(),
        })
    }

    /// Build URL for an API endpoint
    fn build_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ExporterError::config(format!("Invalid URL path {path}: {e}")))
    }

    /// Fetch the raw sensor block from the device.
    ///
    /// Performs exactly one request; retry policy belongs to the caller.
    pub async fn fetch_sensor_data(&self) -> Result<RawReading> {
        let url = self.build_url(SENSOR_ENDPOINT)?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ExporterError::fetch(format!("HTTP {status}: {body}")));
        }

        Ok(response.json().await?)
    }
}
