//! The poll-fetch-parse-write collection loop

use crate::client::SomneoClient;
use crate::config::ExporterConfig;
use crate::error::Result;
use crate::export::InfluxWriter;
use crate::sensors::SensorReading;
use std::future::Future;
use std::time::Duration;
use tracing::{error, info};

/// Fixed-interval collector orchestrating client, normalizer and writer
pub struct Collector {
    client: SomneoClient,
    writer: InfluxWriter,
    location: String,
    poll_interval: Duration,
}

impl Collector {
    /// Create a new collector
    pub fn new(client: SomneoClient, writer: InfluxWriter, config: &ExporterConfig) -> Self {
        Self {
            client,
            writer,
            location: config.location.clone(),
            poll_interval: config.poll_interval,
        }
    }

    /// One fetch → normalize → write pass
    pub async fn run_cycle(&self) -> Result<()> {
        info!("Fetching Somneo sensor data...");
        let raw = self.client.fetch_sensor_data().await?;
        let reading = SensorReading::from_raw(&raw);

        info!("Sensor data: {reading:?}");
        self.writer.write(&reading, &self.location).await
    }

    /// Run cycles forever, `poll_interval` apart, until `shutdown` resolves.
    ///
    /// A failed cycle is logged and abandoned; the fixed interval doubles as
    /// the retry delay. The shutdown future is only observed at the sleep
    /// boundary, after which the writer is released exactly once.
    pub async fn run(self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);

        loop {
            if let Err(e) = self.run_cycle().await {
                error!("Error during data collection: {e}");
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = &mut shutdown => {
                    info!("Shutting down...");
                    break;
                }
            }
        }

        self.writer.close();
    }
}
