//! InfluxDB integration for persisting Somneo sensor readings
//!
//! Speaks the InfluxDB 1.x API: a named database with optional basic
//! credentials, created on demand if missing. Every reading becomes one
//! point under the `somneo_sensors` measurement, tagged with its location.

use crate::config::InfluxConfig;
use crate::error::Result;
use crate::sensors::SensorReading;
use chrono::Utc;
use influxdb::{Client, ReadQuery, Timestamp, WriteQuery};
use tracing::{debug, error, info, warn};

/// Measurement under which all sensor points are grouped
pub const MEASUREMENT: &str = "somneo_sensors";

/// InfluxDB writer owning the single database connection
pub struct InfluxWriter {
    /// InfluxDB client
    client: Client,

    /// Target database
    database: String,
}

impl InfluxWriter {
    /// Connect to InfluxDB and make sure the target database exists.
    ///
    /// The existence check and create are best-effort: the database may
    /// already exist, or only become reachable by the time of the first
    /// write, so failures here degrade to warnings.
    pub async fn connect(config: &InfluxConfig) -> Self {
        let mut client = Client::new(
            config.url.as_str().trim_end_matches('/'),
            &config.database,
        );

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            client = client.with_auth(username.as_str(), password.as_str());
        }

        let writer = Self {
            client,
            database: config.database.clone(),
        };
        writer.ensure_database().await;
        writer
    }

    /// Create the target database unless it is already listed
    async fn ensure_database(&self) {
        match self.client.query(ReadQuery::new("SHOW DATABASES")).await {
            Ok(body) => {
                if database_listed(&body, &self.database) {
                    debug!("Database '{}' already exists", self.database);
                    return;
                }

                let create = format!("CREATE DATABASE \"{}\"", self.database);
                match self.client.query(ReadQuery::new(create)).await {
                    Ok(_) => info!("Created database: {}", self.database),
                    Err(e) => warn!("Could not create database '{}': {e}", self.database),
                }
            }
            Err(e) => warn!("Could not check/create database: {e}"),
        }
    }

    /// Persist one reading as a single tagged point.
    ///
    /// Readings with no present fields are skipped with a warning. A failed
    /// write is propagated so the caller can log it and retry next cycle.
    pub async fn write(&self, reading: &SensorReading, location: &str) -> Result<()> {
        if reading.is_empty() {
            warn!("No valid fields to write");
            return Ok(());
        }

        let timestamp = Timestamp::Milliseconds(Utc::now().timestamp_millis() as u128);
        let mut query = WriteQuery::new(timestamp, MEASUREMENT).add_tag("location", location);
        for (name, value) in reading.fields() {
            query = query.add_field(name, value);
        }

        match self.client.query(query).await {
            Ok(_) => {
                info!("Successfully wrote data to InfluxDB: {reading:?}");
                Ok(())
            }
            Err(e) => {
                error!("Failed to write to InfluxDB: {e}");
                Err(e.into())
            }
        }
    }

    /// Release the underlying connection. Called once at shutdown.
    pub fn close(self) {
        debug!("InfluxDB client released");
    }
}

/// Check a `SHOW DATABASES` response body for `name`.
///
/// The body is the raw JSON the query endpoint returns; anything that does
/// not parse counts as "not listed" and falls through to a create attempt.
fn database_listed(body: &str, name: &str) -> bool {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return false;
    };

    value["results"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|result| result["series"].as_array())
        .flatten()
        .filter_map(|series| series["values"].as_array())
        .flatten()
        .filter_map(|row| row.get(0))
        .any(|entry| entry.as_str() == Some(name))
}
